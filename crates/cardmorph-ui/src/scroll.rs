//! Document scroll lock for the webview.

use std::sync::OnceLock;

use cardmorph_core::{ScrollSurface, SharedScrollSurface};
use dioxus::prelude::*;

/// The webview document's lock, counted across every deck in the process
static DOCUMENT_SCROLL: OnceLock<SharedScrollSurface> = OnceLock::new();

/// Inline `overflow` value for the document body
pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        "auto"
    }
}

/// Scroll surface toggling `document.body.style.overflow` through the
/// renderer's JS bridge.
///
/// Must be driven from inside the Dioxus runtime (event handlers, hooks).
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScrollSurface;

impl ScrollSurface for DocumentScrollSurface {
    fn set_scroll_locked(&self, locked: bool) {
        let js = format!(
            "document.body.style.overflow = '{}';",
            body_overflow(locked)
        );
        let _ = document::eval(&js);
        tracing::trace!(locked, "Document scroll updated");
    }
}

/// Scroll surface for a new deck.
///
/// Every deck gets a handle to the same counted surface, so the body stays
/// locked while any card in any deck is open.
pub fn document_scroll() -> SharedScrollSurface {
    DOCUMENT_SCROLL
        .get_or_init(|| SharedScrollSurface::new(DocumentScrollSurface))
        .clone()
}
