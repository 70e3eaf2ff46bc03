//! Page-level card coordinator.
//!
//! Owns every mounted card instance on a page together with the two shared
//! resources they compete for: the global dismissal listeners and the
//! document scroll lock.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  PageCoordinator  (Arc<RwLock<CoordinatorInner>>)            │
//! │  ├── instances: CorrelationId -> CardInstance                │
//! │  │   └── state Closed | Open, anchor defined iff Open        │
//! │  ├── subscriptions: SubscriptionTable                        │
//! │  │   └── one DismissalSubscription per open instance         │
//! │  ├── scroll: ScrollLock (held iff >= 1 instance open)        │
//! │  └── clock: EventTick                                        │
//! └──────────────────────────────────────────────────────────────┘
//!          ▲ mount() hands out CardHandle, dropping it unmounts
//! ```
//!
//! Every way out of the Open state (close control, backdrop, escape, outside
//! pointer, unmount) goes through the same teardown, which detaches the
//! subscription and releases the instance's claim on the scroll lock.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::dismissal::{DismissalSubscription, SubscriptionTable};
use crate::error::{CardError, CardResult};
use crate::record::CardRecord;
use crate::scroll_lock::{NoopScrollSurface, ScrollLock, ScrollSurface};
use crate::types::{
    CardState, CorrelationId, DismissalSource, EventTick, KeyInput, OverlayAnchor, Transition,
};

/// One mounted card
#[derive(Debug, Clone)]
pub struct CardInstance {
    id: CorrelationId,
    record: CardRecord,
    state: CardState,
    anchor: Option<OverlayAnchor>,
    sessions: u64,
}

impl CardInstance {
    fn new(id: CorrelationId, record: CardRecord) -> Self {
        Self {
            id,
            record,
            state: CardState::Closed,
            anchor: None,
            sessions: 0,
        }
    }

    pub fn id(&self) -> CorrelationId {
        self.id
    }

    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Overlay root of the current session; `None` while closed
    pub fn anchor(&self) -> Option<OverlayAnchor> {
        self.anchor
    }
}

/// Inner state guarded by the coordinator's lock
struct CoordinatorInner {
    instances: BTreeMap<CorrelationId, CardInstance>,
    /// Mount order, for rendering and diagnostics
    order: Vec<CorrelationId>,
    subscriptions: SubscriptionTable,
    scroll: ScrollLock,
    clock: EventTick,
}

impl CoordinatorInner {
    fn new(surface: Box<dyn ScrollSurface>) -> Self {
        Self {
            instances: BTreeMap::new(),
            order: Vec::new(),
            subscriptions: SubscriptionTable::new(),
            scroll: ScrollLock::new(surface),
            clock: EventTick::default(),
        }
    }

    fn instance_mut(&mut self, id: &CorrelationId) -> CardResult<&mut CardInstance> {
        self.instances
            .get_mut(id)
            .ok_or(CardError::UnknownInstance(*id))
    }

    fn mount(&mut self, id: CorrelationId, record: CardRecord) -> CardResult<()> {
        if self.instances.contains_key(&id) {
            tracing::warn!(card = %id, "Rejected duplicate card mount");
            return Err(CardError::DuplicateInstance(id));
        }
        tracing::debug!(card = %id, title = %record.title, "Card mounted");
        self.instances.insert(id, CardInstance::new(id, record));
        self.order.push(id);
        Ok(())
    }

    fn open(&mut self, id: &CorrelationId) -> CardResult<Option<Transition>> {
        let activated_at = self.clock;
        let instance = self.instance_mut(id)?;
        if instance.is_open() {
            return Ok(None);
        }

        instance.sessions += 1;
        let anchor = OverlayAnchor {
            card: *id,
            session: instance.sessions,
        };
        instance.state = CardState::Open;
        instance.anchor = Some(anchor);

        self.subscriptions
            .attach(DismissalSubscription::new(anchor, activated_at));
        self.scroll.acquire(*id);

        tracing::debug!(
            card = %id,
            session = anchor.session,
            open = self.scroll.holder_count(),
            "Card opened"
        );
        Ok(Some(Transition::Opened { card: *id, anchor }))
    }

    /// The single teardown path out of the Open state
    fn close(
        &mut self,
        id: &CorrelationId,
        source: DismissalSource,
    ) -> CardResult<Option<Transition>> {
        let instance = self.instance_mut(id)?;
        if !instance.is_open() {
            return Ok(None);
        }

        instance.state = CardState::Closed;
        instance.anchor = None;

        self.subscriptions.detach(id);
        self.scroll.release(*id);

        tracing::debug!(
            card = %id,
            %source,
            open = self.scroll.holder_count(),
            "Card closed"
        );
        Ok(Some(Transition::Closed { card: *id, source }))
    }

    fn unmount(&mut self, id: &CorrelationId) -> CardResult<Option<Transition>> {
        let transition = self.close(id, DismissalSource::Unmount)?;
        self.instances.remove(id);
        self.order.retain(|mounted| mounted != id);
        tracing::debug!(card = %id, "Card unmounted");
        Ok(transition)
    }

    fn close_each(&mut self, targets: Vec<(CorrelationId, DismissalSource)>) -> Vec<Transition> {
        targets
            .into_iter()
            .filter_map(|(card, source)| self.close(&card, source).ok().flatten())
            .collect()
    }
}

/// Page-level coordinator shared by every card on a page.
///
/// Cheap to clone; clones share the same state.
///
/// # Example
///
/// ```
/// use cardmorph_core::{CardRecord, KeyInput, MemoryScrollSurface, PageCoordinator};
///
/// let surface = MemoryScrollSurface::new();
/// let page = PageCoordinator::new(surface.clone());
/// let card = page.mount(CardRecord::new("Structured Depth")).unwrap();
///
/// card.open().unwrap();
/// assert!(surface.is_locked());
///
/// page.key_down(&KeyInput::Escape);
/// assert!(!card.is_open());
/// assert!(!surface.is_locked());
/// ```
#[derive(Clone)]
pub struct PageCoordinator {
    inner: Arc<RwLock<CoordinatorInner>>,
}

impl PageCoordinator {
    /// Create a coordinator driving `surface` for the scroll lock
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CoordinatorInner::new(Box::new(surface)))),
        }
    }

    /// Coordinator with no document to lock
    pub fn headless() -> Self {
        Self::new(NoopScrollSurface)
    }

    /// Mount a card under a freshly generated correlation id
    pub fn mount(&self, record: CardRecord) -> CardResult<CardHandle> {
        self.mount_with_id(CorrelationId::new(), record)
    }

    /// Mount a card under a caller-chosen correlation id.
    ///
    /// Fails with [`CardError::DuplicateInstance`] if the id is in use.
    pub fn mount_with_id(&self, id: CorrelationId, record: CardRecord) -> CardResult<CardHandle> {
        self.inner.write().mount(id, record)?;
        Ok(CardHandle {
            id,
            page: Arc::downgrade(&self.inner),
        })
    }

    /// Remove an instance, closing it first if open. Idempotent through
    /// [`CardHandle`]; errors here only for ids that were never mounted.
    pub fn unmount(&self, id: &CorrelationId) -> CardResult<Option<Transition>> {
        self.inner.write().unmount(id)
    }

    /// Activate a card. Opening an open card is a no-op.
    pub fn open(&self, id: &CorrelationId) -> CardResult<Option<Transition>> {
        self.inner.write().open(id)
    }

    /// Dismiss a card. Closing a closed card is a no-op.
    pub fn close(
        &self,
        id: &CorrelationId,
        source: DismissalSource,
    ) -> CardResult<Option<Transition>> {
        self.inner.write().close(id, source)
    }

    /// Click on the backdrop layer behind `id`'s overlay
    pub fn backdrop_click(&self, id: &CorrelationId) -> CardResult<Option<Transition>> {
        self.close(id, DismissalSource::Backdrop)
    }

    /// Click on the close control inside `id`'s overlay
    pub fn close_control(&self, id: &CorrelationId) -> CardResult<Option<Transition>> {
        self.close(id, DismissalSource::CloseControl)
    }

    /// Deliver a document key press to every live subscription
    pub fn key_down(&self, key: &KeyInput) -> Vec<Transition> {
        let mut inner = self.inner.write();
        let targets = inner.subscriptions.route_key(key);
        if targets.is_empty() {
            tracing::trace!(?key, "Key press with no dismissal target");
        }
        inner.close_each(targets)
    }

    /// Stamp a new raw pointer input. Cards opened while handling this input
    /// ignore pointer-downs carrying the same tick.
    pub fn next_tick(&self) -> EventTick {
        let mut inner = self.inner.write();
        inner.clock = inner.clock.next();
        inner.clock
    }

    /// Current input tick
    pub fn current_tick(&self) -> EventTick {
        self.inner.read().clock
    }

    /// Deliver a document pointer-down. `hit_path` lists the overlay anchors
    /// containing the event target, innermost first.
    pub fn pointer_down(&self, tick: EventTick, hit_path: &[OverlayAnchor]) -> Vec<Transition> {
        let mut inner = self.inner.write();
        let targets = inner.subscriptions.route_pointer_down(tick, hit_path);
        inner.close_each(targets)
    }

    pub fn is_open(&self, id: &CorrelationId) -> bool {
        self.inner
            .read()
            .instances
            .get(id)
            .map(CardInstance::is_open)
            .unwrap_or(false)
    }

    pub fn state(&self, id: &CorrelationId) -> Option<CardState> {
        self.inner.read().instances.get(id).map(CardInstance::state)
    }

    pub fn anchor(&self, id: &CorrelationId) -> Option<OverlayAnchor> {
        self.inner
            .read()
            .instances
            .get(id)
            .and_then(CardInstance::anchor)
    }

    /// Snapshot of one instance
    pub fn instance(&self, id: &CorrelationId) -> Option<CardInstance> {
        self.inner.read().instances.get(id).cloned()
    }

    /// Mounted instance ids in mount order
    pub fn mounted(&self) -> Vec<CorrelationId> {
        self.inner.read().order.clone()
    }

    /// Number of instances currently open
    pub fn open_count(&self) -> usize {
        self.inner
            .read()
            .instances
            .values()
            .filter(|instance| instance.is_open())
            .count()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.inner.read().scroll.is_locked()
    }

    /// Instances holding a dismissal subscription
    pub fn active_subscriptions(&self) -> usize {
        self.inner.read().subscriptions.len()
    }

    /// Global listeners currently attached to the document
    pub fn listener_count(&self) -> usize {
        self.inner.read().subscriptions.listener_count()
    }
}

impl std::fmt::Debug for PageCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("PageCoordinator")
            .field("mounted", &inner.instances.len())
            .field("subscriptions", &inner.subscriptions.len())
            .field("scroll", &inner.scroll)
            .finish()
    }
}

/// Owning handle to one mounted card.
///
/// Dropping the handle unmounts the card, which closes it first if it was
/// open. Holding a handle does not keep the page alive.
#[derive(Debug)]
pub struct CardHandle {
    id: CorrelationId,
    page: Weak<RwLock<CoordinatorInner>>,
}

impl CardHandle {
    pub fn id(&self) -> CorrelationId {
        self.id
    }

    fn with_page<T>(&self, f: impl FnOnce(&mut CoordinatorInner) -> CardResult<T>) -> CardResult<T> {
        let page = self
            .page
            .upgrade()
            .ok_or(CardError::UnknownInstance(self.id))?;
        let mut inner = page.write();
        f(&mut inner)
    }

    pub fn open(&self) -> CardResult<Option<Transition>> {
        self.with_page(|inner| inner.open(&self.id))
    }

    pub fn close(&self, source: DismissalSource) -> CardResult<Option<Transition>> {
        self.with_page(|inner| inner.close(&self.id, source))
    }

    pub fn is_open(&self) -> bool {
        self.state().map(|state| state.is_open()).unwrap_or(false)
    }

    /// `None` once the card has been unmounted
    pub fn state(&self) -> Option<CardState> {
        self.page
            .upgrade()
            .and_then(|page| page.read().instances.get(&self.id).map(CardInstance::state))
    }

    pub fn anchor(&self) -> Option<OverlayAnchor> {
        self.page
            .upgrade()
            .and_then(|page| page.read().instances.get(&self.id).and_then(CardInstance::anchor))
    }

    /// Unmount now rather than on drop. Safe to call more than once.
    pub fn unmount(&self) -> Option<Transition> {
        let page = self.page.upgrade()?;
        let mut inner = page.write();
        if !inner.instances.contains_key(&self.id) {
            return None;
        }
        inner.unmount(&self.id).ok().flatten()
    }
}

impl Drop for CardHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::MemoryScrollSurface;

    fn page() -> (PageCoordinator, MemoryScrollSurface) {
        let surface = MemoryScrollSurface::new();
        (PageCoordinator::new(surface.clone()), surface)
    }

    #[test]
    fn open_and_close_toggle_state_and_lock() {
        let (page, surface) = page();
        let card = page.mount(CardRecord::new("A")).unwrap();

        let opened = card.open().unwrap();
        assert!(matches!(opened, Some(Transition::Opened { .. })));
        assert!(card.is_open());
        assert!(card.anchor().is_some());
        assert!(surface.is_locked());
        assert_eq!(page.listener_count(), 2);

        let closed = card.close(DismissalSource::CloseControl).unwrap();
        assert_eq!(
            closed,
            Some(Transition::Closed {
                card: card.id(),
                source: DismissalSource::CloseControl
            })
        );
        assert!(card.anchor().is_none());
        assert!(!surface.is_locked());
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn repeated_open_and_close_are_noops() {
        let (page, surface) = page();
        let card = page.mount(CardRecord::new("A")).unwrap();

        assert!(card.open().unwrap().is_some());
        assert!(card.open().unwrap().is_none());
        assert!(card.close(DismissalSource::Programmatic).unwrap().is_some());
        assert!(card.close(DismissalSource::Programmatic).unwrap().is_none());
        assert_eq!(surface.history(), vec![true, false]);
    }

    #[test]
    fn each_open_issues_a_fresh_anchor() {
        let (page, _) = page();
        let card = page.mount(CardRecord::new("A")).unwrap();

        card.open().unwrap();
        let first = card.anchor().unwrap();
        card.close(DismissalSource::Backdrop).unwrap();
        card.open().unwrap();
        let second = card.anchor().unwrap();
        assert_ne!(first, second);
        assert_eq!(first.card, second.card);
    }

    #[test]
    fn duplicate_mount_rejected() {
        let (page, _) = page();
        let id = CorrelationId::new();
        let _first = page.mount_with_id(id, CardRecord::new("A")).unwrap();
        let err = page.mount_with_id(id, CardRecord::new("A")).unwrap_err();
        assert!(matches!(err, CardError::DuplicateInstance(dup) if dup == id));
    }

    #[test]
    fn same_title_gets_distinct_ids() {
        let (page, _) = page();
        let a = page.mount(CardRecord::new("Same")).unwrap();
        let b = page.mount(CardRecord::new("Same")).unwrap();
        assert_ne!(a.id(), b.id());

        a.open().unwrap();
        assert!(!b.is_open());
    }

    #[test]
    fn unknown_instance_errors() {
        let (page, _) = page();
        let id = CorrelationId::new();
        assert!(matches!(page.open(&id), Err(CardError::UnknownInstance(_))));
        assert!(matches!(
            page.close(&id, DismissalSource::Programmatic),
            Err(CardError::UnknownInstance(_))
        ));
    }

    #[test]
    fn drop_handle_while_open_releases_everything() {
        let (page, surface) = page();
        let card = page.mount(CardRecord::new("A")).unwrap();
        let id = card.id();
        card.open().unwrap();

        drop(card);

        assert!(page.state(&id).is_none());
        assert_eq!(page.listener_count(), 0);
        assert!(!surface.is_locked());
        assert!(page.mounted().is_empty());
    }

    #[test]
    fn explicit_unmount_then_drop_is_safe() {
        let (page, _) = page();
        let card = page.mount(CardRecord::new("A")).unwrap();
        card.open().unwrap();

        let transition = card.unmount();
        assert_eq!(
            transition,
            Some(Transition::Closed {
                card: card.id(),
                source: DismissalSource::Unmount
            })
        );
        assert!(card.unmount().is_none());
        drop(card);
        assert!(page.mounted().is_empty());
    }

    #[test]
    fn handle_outliving_page_is_inert() {
        let card = {
            let page = PageCoordinator::headless();
            page.mount(CardRecord::new("A")).unwrap()
        };
        assert!(card.state().is_none());
        assert!(matches!(card.open(), Err(CardError::UnknownInstance(_))));
    }

    #[test]
    fn mounted_preserves_order() {
        let (page, _) = page();
        let a = page.mount(CardRecord::new("A")).unwrap();
        let b = page.mount(CardRecord::new("B")).unwrap();
        let c = page.mount(CardRecord::new("C")).unwrap();
        assert_eq!(page.mounted(), vec![a.id(), b.id(), c.id()]);

        drop(b);
        assert_eq!(page.mounted(), vec![a.id(), c.id()]);
    }

    #[test]
    fn backdrop_and_close_control_report_source() {
        let (page, _) = page();
        let card = page.mount(CardRecord::new("A")).unwrap();

        card.open().unwrap();
        assert_eq!(
            page.backdrop_click(&card.id()).unwrap(),
            Some(Transition::Closed {
                card: card.id(),
                source: DismissalSource::Backdrop
            })
        );

        card.open().unwrap();
        assert_eq!(
            page.close_control(&card.id()).unwrap(),
            Some(Transition::Closed {
                card: card.id(),
                source: DismissalSource::CloseControl
            })
        );
    }
}
