//! Card Deck Component
//!
//! Page-level root for expandable cards. Owns the [`PageCoordinator`] and
//! forwards pointer-downs and document key presses to the dismissal
//! subscriptions of whichever cards are open.

use std::cell::RefCell;
use std::rc::Rc;

use cardmorph_core::{OverlayAnchor, PageCoordinator, Transition};
use dioxus::prelude::*;

use crate::keyboard::{listener_change, DocumentKeyListener, ListenerChange};
use crate::scroll::document_scroll;

/// Shared deck state provided to every card below a [`CardDeck`].
#[derive(Clone)]
pub struct DeckContext {
    page: PageCoordinator,
    /// Bumped after every state transition so cards re-read their state
    revision: Signal<u64>,
    /// Overlay anchors the in-flight pointer-down passed through
    pointer_path: Signal<Vec<OverlayAnchor>>,
}

impl DeckContext {
    pub fn page(&self) -> &PageCoordinator {
        &self.page
    }

    /// Current revision; reading it subscribes the caller to transitions
    pub fn revision(&self) -> u64 {
        (self.revision)()
    }

    /// Notify subscribed cards when anything changed
    pub fn publish(&mut self, transitions: &[Transition]) {
        if transitions.is_empty() {
            return;
        }
        for transition in transitions {
            tracing::debug!(?transition, "Deck transition");
        }
        *self.revision.write() += 1;
    }

    /// Record that the current pointer-down landed inside `anchor`'s overlay.
    /// Called by overlays before the event bubbles to the deck root.
    pub fn note_pointer_inside(&mut self, anchor: OverlayAnchor) {
        self.pointer_path.write().push(anchor);
    }

    fn take_pointer_path(&mut self) -> Vec<OverlayAnchor> {
        std::mem::take(&mut *self.pointer_path.write())
    }
}

/// Hook to access the enclosing deck.
///
/// Panics outside a [`CardDeck`].
pub fn use_deck() -> DeckContext {
    use_context::<DeckContext>()
}

/// Root of a page of expandable cards
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardDeck {
///         for record in records {
///             ExpandableCard { record: record.clone() }
///         }
///     }
/// }
/// ```
#[component]
pub fn CardDeck(
    /// Extra classes on the root element
    #[props(default)]
    class: Option<String>,
    /// Cards and surrounding layout
    children: Element,
) -> Element {
    let page = use_hook(|| PageCoordinator::new(document_scroll()));
    let revision = use_signal(|| 0u64);
    let pointer_path = use_signal(Vec::new);
    let deck = use_context_provider(|| DeckContext {
        page,
        revision,
        pointer_path,
    });

    // Escape listener on the document, held while any card here is open.
    // Dropped with the hook on unmount.
    let key_listener = use_hook(|| Rc::new(RefCell::new(None::<DocumentKeyListener>)));
    use_effect({
        let deck = deck.clone();
        move || {
            deck.revision();
            let attached = key_listener.borrow().is_some();
            match listener_change(deck.page().open_count(), attached) {
                Some(ListenerChange::Attach) => {
                    *key_listener.borrow_mut() = Some(DocumentKeyListener::attach(deck.clone()));
                }
                Some(ListenerChange::Detach) => {
                    key_listener.borrow_mut().take();
                }
                None => {}
            }
        }
    });

    let on_pointerdown = {
        let mut deck = deck.clone();
        move |_evt: PointerEvent| {
            let tick = deck.page().next_tick();
            let path = deck.take_pointer_path();
            let transitions = deck.page().pointer_down(tick, &path);
            deck.publish(&transitions);
        }
    };

    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: "card-deck {extra}",
            onpointerdown: on_pointerdown,
            {children}
        }
    }
}
