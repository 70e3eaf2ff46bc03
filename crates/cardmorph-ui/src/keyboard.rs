//! Document-level key listener for open cards.
//!
//! Escape must dismiss an open card wherever focus sits, so the deck listens
//! on `document` rather than on its own element. The listener exists only
//! while at least one of the deck's cards is open.

use std::sync::atomic::{AtomicU64, Ordering};

use cardmorph_core::KeyInput;
use dioxus::prelude::*;

use crate::components::DeckContext;

static NEXT_SLOT: AtomicU64 = AtomicU64::new(1);

/// Change a deck must make to its document listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
}

/// Decide whether the listener should be attached or removed, given how many
/// of the deck's cards are open
pub fn listener_change(open_count: usize, attached: bool) -> Option<ListenerChange> {
    match (open_count > 0, attached) {
        (true, false) => Some(ListenerChange::Attach),
        (false, true) => Some(ListenerChange::Detach),
        _ => None,
    }
}

/// JS registering a `keydown` handler on `document` under `window[slot]`,
/// forwarding each key name over the eval channel
pub fn attach_script(slot: &str) -> String {
    format!(
        r#"if (!window["{slot}"]) {{
  window["{slot}"] = (event) => dioxus.send(event.key);
  document.addEventListener("keydown", window["{slot}"]);
}}"#
    )
}

/// JS removing the handler installed by [`attach_script`]
pub fn detach_script(slot: &str) -> String {
    format!(
        r#"if (window["{slot}"]) {{
  document.removeEventListener("keydown", window["{slot}"]);
  delete window["{slot}"];
}}"#
    )
}

/// Live `keydown` listener on the webview document.
///
/// Dropping it removes the listener and stops the task reading from it.
pub struct DocumentKeyListener {
    slot: String,
    task: Task,
}

impl DocumentKeyListener {
    /// Install the listener and start routing keys into `deck`.
    ///
    /// Must be called inside the Dioxus runtime.
    pub fn attach(deck: DeckContext) -> Self {
        let slot = format!("__cardmorph_keys_{}", NEXT_SLOT.fetch_add(1, Ordering::Relaxed));
        let script = attach_script(&slot);

        let task = spawn(async move {
            let mut deck = deck;
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<String>().await {
                    Ok(key) => {
                        let transitions = deck.page().key_down(&KeyInput::from_dom_key(&key));
                        deck.publish(&transitions);
                    }
                    Err(err) => {
                        tracing::warn!(?err, "Document key listener stopped");
                        break;
                    }
                }
            }
        });

        tracing::debug!(%slot, "Document key listener attached");
        Self { slot, task }
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        self.task.cancel();
        let _ = document::eval(&detach_script(&self.slot));
        tracing::debug!(slot = %self.slot, "Document key listener detached");
    }
}

impl std::fmt::Debug for DocumentKeyListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentKeyListener")
            .field("slot", &self.slot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_on_first_open() {
        assert_eq!(listener_change(1, false), Some(ListenerChange::Attach));
        assert_eq!(listener_change(3, false), Some(ListenerChange::Attach));
    }

    #[test]
    fn detaches_after_last_close() {
        assert_eq!(listener_change(0, true), Some(ListenerChange::Detach));
    }

    #[test]
    fn steady_states_leave_listener_alone() {
        assert_eq!(listener_change(0, false), None);
        assert_eq!(listener_change(2, true), None);
    }

    #[test]
    fn open_close_sequence_attaches_once() {
        let mut attached = false;
        let mut changes = Vec::new();
        for open in [0, 1, 2, 1, 0, 0, 1, 0] {
            if let Some(change) = listener_change(open, attached) {
                attached = change == ListenerChange::Attach;
                changes.push(change);
            }
        }
        assert_eq!(
            changes,
            vec![
                ListenerChange::Attach,
                ListenerChange::Detach,
                ListenerChange::Attach,
                ListenerChange::Detach,
            ]
        );
        assert!(!attached);
    }

    #[test]
    fn scripts_target_the_document() {
        let attach = attach_script("__cardmorph_keys_7");
        assert!(attach.contains(r#"document.addEventListener("keydown", window["__cardmorph_keys_7"])"#));
        assert!(attach.contains("dioxus.send(event.key)"));

        let detach = detach_script("__cardmorph_keys_7");
        assert!(detach.contains(r#"document.removeEventListener("keydown", window["__cardmorph_keys_7"])"#));
        assert!(detach.contains(r#"delete window["__cardmorph_keys_7"]"#));
    }

    #[test]
    fn dom_escape_reaches_dismissal() {
        assert_eq!(KeyInput::from_dom_key("Escape"), KeyInput::Escape);
    }
}
