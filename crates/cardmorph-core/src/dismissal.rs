//! Global dismissal subscriptions.
//!
//! Each open instance owns exactly one subscription covering the document
//! keyboard and pointer-down listeners. It exists only between open and
//! close (or unmount), so a closed card never sees global input.

use std::collections::BTreeMap;

use crate::types::{CorrelationId, DismissalSource, EventTick, KeyInput, OverlayAnchor};

/// Global listeners held by one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    KeyDown,
    PointerDown,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 2] = [ListenerKind::KeyDown, ListenerKind::PointerDown];
}

/// Listeners attached on behalf of one open instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissalSubscription {
    anchor: OverlayAnchor,
    activated_at: EventTick,
}

impl DismissalSubscription {
    pub fn new(anchor: OverlayAnchor, activated_at: EventTick) -> Self {
        Self {
            anchor,
            activated_at,
        }
    }

    pub fn anchor(&self) -> OverlayAnchor {
        self.anchor
    }

    pub fn card(&self) -> CorrelationId {
        self.anchor.card
    }

    /// Escape closes; every other key is ignored
    pub fn on_key(&self, key: &KeyInput) -> Option<DismissalSource> {
        match key {
            KeyInput::Escape => Some(DismissalSource::Escape),
            KeyInput::Other(_) => None,
        }
    }

    /// Pointer-down closes unless it lands inside this overlay or belongs to
    /// the activating input.
    ///
    /// `hit_path` lists every overlay anchor containing the event target.
    pub fn on_pointer_down(
        &self,
        tick: EventTick,
        hit_path: &[OverlayAnchor],
    ) -> Option<DismissalSource> {
        if tick <= self.activated_at {
            return None;
        }
        if hit_path.contains(&self.anchor) {
            return None;
        }
        Some(DismissalSource::OutsidePointer)
    }
}

/// All live subscriptions on a page, at most one per instance
#[derive(Debug, Default)]
pub struct SubscriptionTable {
    active: BTreeMap<CorrelationId, DismissalSubscription>,
}

impl SubscriptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach listeners for `subscription`'s instance, replacing any stale
    /// subscription it still held.
    pub fn attach(&mut self, subscription: DismissalSubscription) {
        let card = subscription.card();
        if self.active.insert(card, subscription).is_some() {
            tracing::warn!(%card, "Replaced stale dismissal subscription");
        }
    }

    /// Detach the instance's listeners. Returns whether any were attached.
    pub fn detach(&mut self, card: &CorrelationId) -> bool {
        self.active.remove(card).is_some()
    }

    pub fn get(&self, card: &CorrelationId) -> Option<&DismissalSubscription> {
        self.active.get(card)
    }

    /// Number of instances with live subscriptions
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of global listeners currently attached to the document
    pub fn listener_count(&self) -> usize {
        self.active.len() * ListenerKind::ALL.len()
    }

    /// Instances a key press dismisses
    pub fn route_key(&self, key: &KeyInput) -> Vec<(CorrelationId, DismissalSource)> {
        self.active
            .iter()
            .filter_map(|(card, sub)| sub.on_key(key).map(|source| (*card, source)))
            .collect()
    }

    /// Instances a pointer-down dismisses
    pub fn route_pointer_down(
        &self,
        tick: EventTick,
        hit_path: &[OverlayAnchor],
    ) -> Vec<(CorrelationId, DismissalSource)> {
        self.active
            .iter()
            .filter_map(|(card, sub)| {
                sub.on_pointer_down(tick, hit_path)
                    .map(|source| (*card, source))
            })
            .collect()
    }
}
