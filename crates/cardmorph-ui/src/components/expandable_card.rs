//! Expandable Card Component
//!
//! A collapsed tile that expands in place into a full-detail overlay. The
//! tile and overlay share layout ids (frame, image, title, description,
//! control) so the overlay appears to grow out of the tile and shrink back
//! into it.
//!
//! Dismissal:
//! - escape (document listener) and outside pointer-down arrive through the
//!   enclosing [`CardDeck`](super::CardDeck)
//! - the backdrop closes on its own pointer-down, before that press bubbles
//!   to the deck, so the close is reported as a backdrop dismissal
//! - the close control calls the coordinator directly
//!
//! The overlay layer lets pointer input through to the backdrop everywhere
//! outside its children (`pointer-events: none` in the stylesheet).

use std::rc::Rc;

use cardmorph_core::{
    layout_id, resolve_body, resolve_image, CardHandle, CardOptions, CardRecord, ImageSurface,
    SharedRole,
};
use dioxus::prelude::*;

use super::close_button::{class_list, CloseButton};
use super::content_body::ContentBody;
use super::deck::use_deck;
use crate::morph::use_morph;

/// Inline style for a tile element, hiding it while its overlay is shown
pub fn tile_element_style(is_open: bool, morph_style: &str) -> String {
    if is_open {
        format!("visibility: hidden; {}", morph_style)
    } else {
        morph_style.to_string()
    }
}

/// Inline style for the image region
pub fn image_style(surface: &ImageSurface) -> String {
    match surface {
        ImageSurface::Photo { .. } => String::new(),
        ImageSurface::Placeholder { background } => format!("background: {};", background),
    }
}

/// Expandable card bound to the enclosing deck
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardDeck {
///         ExpandableCard {
///             record: CardRecord::new("Structured Depth")
///                 .with_description("Layered analysis"),
///             options: CardOptions::default().with_cta_label("Open"),
///             p { "Extra overlay content" }
///         }
///     }
/// }
/// ```
#[component]
pub fn ExpandableCard(
    /// Display data
    record: CardRecord,
    /// Labels, fallbacks and extra classes
    #[props(default)]
    options: CardOptions,
    /// Supplemental content rendered below the record's body in the overlay
    #[props(default = VNode::empty())]
    children: Element,
) -> Element {
    let deck = use_deck();
    let mut morph = use_morph();
    let mut was_open = use_signal(|| false);

    let handle: Option<Rc<CardHandle>> = use_hook(|| match deck.page().mount(record.clone()) {
        Ok(handle) => Some(Rc::new(handle)),
        Err(e) => {
            tracing::error!("Failed to mount card '{}': {}", record.title, e);
            None
        }
    });

    use_drop({
        let handle = handle.clone();
        move || {
            if let Some(handle) = &handle {
                handle.unmount();
            }
        }
    });

    // Play the return morph whenever the card closes, whatever closed it
    use_effect({
        let deck = deck.clone();
        let handle = handle.clone();
        move || {
            deck.revision();
            let open = handle.as_ref().map(|h| h.is_open()).unwrap_or(false);
            if open != *was_open.peek() {
                was_open.set(open);
                if !open {
                    morph.begin_close();
                }
            }
        }
    });

    let Some(handle) = handle else {
        return VNode::empty();
    };

    deck.revision();
    let id = handle.id();
    let anchor = handle.anchor();
    let is_open = anchor.is_some();

    let image = resolve_image(&record, options.image_fallback);
    let image_bg = image_style(&image);
    let tile_class = class_list("card-tile", options.class_name.as_deref());
    let overlay_class = class_list("card-overlay", options.class_name_expanded.as_deref());

    let tile_frame_style = tile_element_style(is_open, &morph.tile_style(SharedRole::Frame));
    let tile_image_style = format!("{} {}", image_bg, morph.tile_style(SharedRole::Image));
    let tile_title_style = morph.tile_style(SharedRole::Title);
    let tile_description_style = morph.tile_style(SharedRole::Description);
    let tile_control_style = morph.tile_style(SharedRole::Control);
    let overlay_frame_style = morph.overlay_style(SharedRole::Frame);
    let overlay_image_style = format!("{} {}", image_bg, morph.overlay_style(SharedRole::Image));
    let overlay_title_style = morph.overlay_style(SharedRole::Title);
    let overlay_description_style = morph.overlay_style(SharedRole::Description);
    let overlay_control_style = morph.overlay_style(SharedRole::Control);

    let open_card = {
        let mut deck = deck.clone();
        let handle = handle.clone();
        move |_| match handle.open() {
            Ok(Some(transition)) => {
                morph.begin_open();
                deck.publish(&[transition]);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to open card: {}", e),
        }
    };

    rsx! {
        // Collapsed tile
        div {
            class: "{tile_class}",
            id: layout_id(SharedRole::Frame, &id),
            style: "{tile_frame_style}",
            onclick: open_card,
            onmounted: move |evt: MountedEvent| morph.register_tile(SharedRole::Frame, evt.data()),

            div {
                class: "card-tile__image",
                id: layout_id(SharedRole::Image, &id),
                style: "{tile_image_style}",
                onmounted: move |evt: MountedEvent| morph.register_tile(SharedRole::Image, evt.data()),
                if let ImageSurface::Photo { src, alt } = &image {
                    img { src: "{src}", alt: "{alt}", class: "card-tile__img" }
                    div { class: "card-tile__shade" }
                }
            }

            div { class: "card-tile__bar",
                div { class: "card-tile__text",
                    h3 {
                        class: "card-tile__title",
                        id: layout_id(SharedRole::Title, &id),
                        style: "{tile_title_style}",
                        onmounted: move |evt: MountedEvent| morph.register_tile(SharedRole::Title, evt.data()),
                        "{record.title}"
                    }
                    if let Some(description) = &record.description {
                        p {
                            class: "card-tile__description",
                            id: layout_id(SharedRole::Description, &id),
                            style: "{tile_description_style}",
                            onmounted: move |evt: MountedEvent| morph.register_tile(SharedRole::Description, evt.data()),
                            "{description}"
                        }
                    }
                }
                button {
                    class: "card-tile__cta",
                    r#type: "button",
                    id: layout_id(SharedRole::Control, &id),
                    style: "{tile_control_style}",
                    onmounted: move |evt: MountedEvent| morph.register_tile(SharedRole::Control, evt.data()),
                    "{options.cta_label}"
                }
            }
        }

        if let Some(anchor) = anchor {
            // Backdrop
            div {
                class: "card-backdrop",
                onpointerdown: {
                    let mut deck = deck.clone();
                    move |_| {
                        if let Ok(Some(transition)) = deck.page().backdrop_click(&id) {
                            deck.publish(&[transition]);
                        }
                    }
                },
            }

            // Expanded overlay
            div { class: "card-overlay-layer",
                CloseButton {
                    glyph: options.close_glyph.clone(),
                    class: Some("overlay-close--corner".to_string()),
                    onclick: {
                        let mut deck = deck.clone();
                        move |_| {
                            if let Ok(Some(transition)) = deck.page().close_control(&id) {
                                deck.publish(&[transition]);
                            }
                        }
                    },
                }

                div {
                    class: "{overlay_class}",
                    "data-layout-id": layout_id(SharedRole::Frame, &id),
                    tabindex: "-1",
                    style: "{overlay_frame_style}",
                    onpointerdown: {
                        let mut deck = deck.clone();
                        move |_| deck.note_pointer_inside(anchor)
                    },
                    onmounted: move |evt: MountedEvent| {
                        let node = evt.data();
                        morph.register_overlay(SharedRole::Frame, node.clone());
                        spawn(morph.play_open());
                        spawn(async move {
                            if let Err(err) = node.set_focus(true).await {
                                tracing::debug!(?err, "Could not focus expanded card");
                            }
                        });
                    },

                    div {
                        class: "card-overlay__image",
                        "data-layout-id": layout_id(SharedRole::Image, &id),
                        style: "{overlay_image_style}",
                        onmounted: move |evt: MountedEvent| morph.register_overlay(SharedRole::Image, evt.data()),
                        if let ImageSurface::Photo { src, alt } = &image {
                            img { src: "{src}", alt: "{alt}", class: "card-overlay__img" }
                        }
                    }

                    div { class: "card-overlay__scroll",
                        div { class: "card-overlay__header",
                            div {
                                h3 {
                                    class: "card-overlay__title",
                                    "data-layout-id": layout_id(SharedRole::Title, &id),
                                    style: "{overlay_title_style}",
                                    onmounted: move |evt: MountedEvent| morph.register_overlay(SharedRole::Title, evt.data()),
                                    "{record.title}"
                                }
                                if let Some(description) = &record.description {
                                    p {
                                        class: "card-overlay__description",
                                        "data-layout-id": layout_id(SharedRole::Description, &id),
                                        style: "{overlay_description_style}",
                                        onmounted: move |evt: MountedEvent| morph.register_overlay(SharedRole::Description, evt.data()),
                                        "{description}"
                                    }
                                }
                            }
                            CloseButton {
                                glyph: options.close_glyph.clone(),
                                id: Some(format!("close-{}", id.slug())),
                                style: overlay_control_style.clone(),
                                onmounted: move |evt: MountedEvent| morph.register_overlay(SharedRole::Control, evt.data()),
                                onclick: {
                                    let mut deck = deck.clone();
                                    move |_| {
                                        if let Ok(Some(transition)) = deck.page().close_control(&id) {
                                            deck.publish(&[transition]);
                                        }
                                    }
                                },
                            }
                        }

                        ContentBody { content: resolve_body(&record) }

                        div { class: "card-overlay__extra", {children} }
                    }
                }
            }
        }
    }
}
