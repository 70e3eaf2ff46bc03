//! Page scroll lock shared by every card on a page.
//!
//! The lock is an aggregate over open instances, not a flag each card
//! overwrites: it is applied when the first instance opens and released when
//! the last one closes.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::CorrelationId;

/// Host side of the scroll lock (the document body in a browser or webview).
///
/// Called while the coordinator's state is locked: implementations must not
/// call back into the coordinator.
pub trait ScrollSurface: Send + Sync {
    /// Suppress (`true`) or restore (`false`) document scrolling
    fn set_scroll_locked(&self, locked: bool);
}

/// Surface that does nothing, for hosts without a scrollable document
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollSurface;

impl ScrollSurface for NoopScrollSurface {
    fn set_scroll_locked(&self, _locked: bool) {}
}

#[derive(Debug, Default)]
struct MemoryScrollState {
    locked: bool,
    history: Vec<bool>,
}

/// In-memory surface recording every lock change.
///
/// Clones share state, so a test can keep one clone and hand the other to
/// the coordinator.
#[derive(Debug, Clone, Default)]
pub struct MemoryScrollSurface {
    state: Arc<Mutex<MemoryScrollState>>,
}

impl MemoryScrollSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document scroll state
    pub fn is_locked(&self) -> bool {
        self.state.lock().locked
    }

    /// Every value passed to `set_scroll_locked`, in order
    pub fn history(&self) -> Vec<bool> {
        self.state.lock().history.clone()
    }
}

impl ScrollSurface for MemoryScrollSurface {
    fn set_scroll_locked(&self, locked: bool) {
        let mut state = self.state.lock();
        state.locked = locked;
        state.history.push(locked);
    }
}

struct SharedScrollState {
    holders: usize,
    surface: Box<dyn ScrollSurface>,
}

/// One document's scroll surface shared by several coordinators.
///
/// Each coordinator only reports its own edges (first card opened, last card
/// closed). This surface counts those claims and drives the document only
/// when the first claim arrives or the last one goes away, so two decks on
/// one page never undo each other's lock. Clones share the count.
#[derive(Clone)]
pub struct SharedScrollSurface {
    state: Arc<Mutex<SharedScrollState>>,
}

impl SharedScrollSurface {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(SharedScrollState {
                holders: 0,
                surface: Box::new(surface),
            })),
        }
    }

    /// Coordinators currently holding the document lock
    pub fn holders(&self) -> usize {
        self.state.lock().holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Whether both handles count claims for the same document
    pub fn shares_count_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollSurface for SharedScrollSurface {
    fn set_scroll_locked(&self, locked: bool) {
        let mut state = self.state.lock();
        if locked {
            state.holders += 1;
            if state.holders == 1 {
                state.surface.set_scroll_locked(true);
            }
        } else if state.holders > 0 {
            state.holders -= 1;
            if state.holders == 0 {
                state.surface.set_scroll_locked(false);
            }
        } else {
            tracing::warn!("Ignored scroll release with no holders");
        }
    }
}

impl std::fmt::Debug for SharedScrollSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedScrollSurface")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Reference-counted scroll lock keyed by the instances holding it
pub struct ScrollLock {
    holders: BTreeSet<CorrelationId>,
    surface: Box<dyn ScrollSurface>,
    applied: bool,
}

impl ScrollLock {
    pub fn new(surface: Box<dyn ScrollSurface>) -> Self {
        Self {
            holders: BTreeSet::new(),
            surface,
            applied: false,
        }
    }

    /// Register `card` as needing the lock. Re-acquiring is a no-op.
    pub fn acquire(&mut self, card: CorrelationId) {
        self.holders.insert(card);
        self.sync();
    }

    /// Drop `card`'s claim. Releasing without a claim is a no-op.
    pub fn release(&mut self, card: CorrelationId) {
        self.holders.remove(&card);
        self.sync();
    }

    /// Number of instances currently holding the lock
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    /// Whether the surface has been told to suppress scrolling
    pub fn is_locked(&self) -> bool {
        self.applied
    }

    /// Bring the surface in line with the holder count, touching it only on
    /// an edge.
    fn sync(&mut self) {
        let wanted = !self.holders.is_empty();
        if wanted != self.applied {
            self.applied = wanted;
            self.surface.set_scroll_locked(wanted);
            tracing::trace!(locked = wanted, holders = self.holders.len(), "Scroll lock changed");
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if self.applied {
            self.surface.set_scroll_locked(false);
        }
    }
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders.len())
            .field("applied", &self.applied)
            .finish()
    }
}
