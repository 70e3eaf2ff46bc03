//! Close Button Component
//!
//! Round icon button used as the overlay's explicit close control.

use dioxus::prelude::*;

/// Join a base class with optional caller-supplied classes
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the CloseButton component
#[derive(Clone, PartialEq, Props)]
pub struct CloseButtonProps {
    /// Glyph shown in the button (× by default)
    pub glyph: String,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// DOM id, used to tie the button to its tile counterpart
    #[props(default)]
    pub id: Option<String>,
    /// Inline style (morph transforms)
    #[props(default)]
    pub style: String,
    /// Receives the mounted element
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Close control inside the expanded overlay
///
/// The click does not bubble, so the deck never sees it as a second input.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CloseButton {
///         glyph: options.close_glyph.clone(),
///         onclick: move |_| close(),
///     }
/// }
/// ```
#[component]
pub fn CloseButton(props: CloseButtonProps) -> Element {
    let full_class = class_list("icon-btn close-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            id: props.id.clone(),
            style: "{props.style}",
            "aria-label": "Close",
            onclick: move |evt| {
                evt.stop_propagation();
                props.onclick.call(());
            },
            onmounted: move |evt| {
                if let Some(handler) = &props.onmounted {
                    handler.call(evt);
                }
            },
            "{props.glyph}"
        }
    }
}
