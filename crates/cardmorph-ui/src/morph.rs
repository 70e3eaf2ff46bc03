//! Shared-element morph between a tile and its overlay.
//!
//! Elements register themselves by [`SharedRole`] when mounted. On open the
//! overlay is held invisible until both trees are measured, then drawn
//! inverted over the tile and released. On close the tile is drawn inverted
//! over the last overlay geometry and released back into the grid.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use cardmorph_core::{LayoutSnapshot, MorphPhase, MorphPlan, Rect, SharedRole, Spring};
use dioxus::prelude::*;

/// One paint, long enough for the inverted transform to land on screen
const FRAME: Duration = Duration::from_millis(16);

type NodeMap = BTreeMap<SharedRole, Rc<MountedData>>;

/// Signals driving one card's morph. Copy, like the signals it holds.
#[derive(Clone, Copy)]
pub struct MorphController {
    tile_nodes: Signal<NodeMap>,
    overlay_nodes: Signal<NodeMap>,
    tile_snapshot: Signal<LayoutSnapshot>,
    overlay_snapshot: Signal<LayoutSnapshot>,
    overlay_plan: Signal<MorphPlan>,
    overlay_phase: Signal<MorphPhase>,
    tile_plan: Signal<MorphPlan>,
    tile_phase: Signal<MorphPhase>,
    /// Bumped on every open/close; stale animation tasks bail out
    generation: Signal<u64>,
}

/// Hook creating a card's morph controller
pub fn use_morph() -> MorphController {
    MorphController {
        tile_nodes: use_signal(BTreeMap::new),
        overlay_nodes: use_signal(BTreeMap::new),
        tile_snapshot: use_signal(LayoutSnapshot::new),
        overlay_snapshot: use_signal(LayoutSnapshot::new),
        overlay_plan: use_signal(MorphPlan::default),
        overlay_phase: use_signal(MorphPhase::default),
        tile_plan: use_signal(MorphPlan::default),
        tile_phase: use_signal(MorphPhase::default),
        generation: use_signal(|| 0u64),
    }
}

async fn measure(nodes: NodeMap) -> LayoutSnapshot {
    let mut snapshot = LayoutSnapshot::new();
    for (role, node) in nodes {
        match node.get_client_rect().await {
            Ok(rect) => snapshot.record(
                role,
                Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height),
            ),
            Err(err) => tracing::trace!(?role, ?err, "Could not measure shared element"),
        }
    }
    snapshot
}

impl MorphController {
    pub fn register_tile(&mut self, role: SharedRole, node: Rc<MountedData>) {
        self.tile_nodes.write().insert(role, node);
    }

    pub fn register_overlay(&mut self, role: SharedRole, node: Rc<MountedData>) {
        self.overlay_nodes.write().insert(role, node);
    }

    /// Inline style for a tile element
    pub fn tile_style(&self, role: SharedRole) -> String {
        self.tile_phase.read().style(&self.tile_plan.read(), role)
    }

    /// Inline style for an overlay element
    pub fn overlay_style(&self, role: SharedRole) -> String {
        self.overlay_phase.read().style(&self.overlay_plan.read(), role)
    }

    fn next_generation(&mut self) -> u64 {
        let mut generation = self.generation.write();
        *generation += 1;
        *generation
    }

    fn is_current(&self, generation: u64) -> bool {
        *self.generation.peek() == generation
    }

    /// Called when the card opens, before the overlay mounts
    pub fn begin_open(&mut self) {
        self.next_generation();
        self.tile_phase.set(MorphPhase::Settled);
        self.overlay_phase.set(MorphPhase::Measuring);
    }

    /// Measure both trees and play the tile -> overlay morph.
    ///
    /// Spawned from the overlay frame's `onmounted`.
    pub async fn play_open(mut self) {
        let generation = *self.generation.peek();

        // Let the remaining overlay elements finish mounting
        tokio::task::yield_now().await;

        let tile = measure(self.tile_nodes.peek().clone()).await;
        let overlay = measure(self.overlay_nodes.peek().clone()).await;
        if !self.is_current(generation) {
            return;
        }

        let plan = MorphPlan::between(&tile, &overlay);
        self.tile_snapshot.set(tile);
        self.overlay_snapshot.set(overlay);
        if plan.is_empty() {
            self.overlay_phase.set(MorphPhase::Settled);
            return;
        }

        self.overlay_plan.set(plan);
        self.overlay_phase.set(MorphPhase::Inverted);
        self.release(generation, false).await;
    }

    /// Called once the card has closed; plays overlay -> tile
    pub fn begin_close(&mut self) {
        let generation = self.next_generation();
        self.overlay_nodes.write().clear();
        self.overlay_phase.set(MorphPhase::Settled);

        let plan = MorphPlan::between(&self.overlay_snapshot.peek(), &self.tile_snapshot.peek());
        if plan.is_empty() {
            self.tile_phase.set(MorphPhase::Settled);
            return;
        }

        self.tile_plan.set(plan);
        self.tile_phase.set(MorphPhase::Inverted);
        let this = *self;
        spawn(async move {
            this.release(generation, true).await;
        });
    }

    /// Inverted -> Playing -> Settled, unless superseded
    async fn release(self, generation: u64, tile: bool) {
        let mut phase = if tile {
            self.tile_phase
        } else {
            self.overlay_phase
        };

        tokio::time::sleep(FRAME).await;
        if !self.is_current(generation) {
            return;
        }
        phase.set(MorphPhase::Playing);

        let settle = Duration::from_secs_f64(Spring::FRAME.settle_secs().max(Spring::CONTROL.settle_secs()));
        tokio::time::sleep(settle).await;
        if !self.is_current(generation) {
            return;
        }
        phase.set(MorphPhase::Settled);
        // Stale geometry must not leak into the next open
        if tile {
            let mut tile_plan = self.tile_plan;
            tile_plan.set(MorphPlan::default());
        }
    }
}
