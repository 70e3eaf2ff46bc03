use cardmorph_ui::{CardDeck, ExpandableCard, CARD_STYLES};
use dioxus::prelude::*;

use crate::context::get_showcase;
use crate::theme::PAGE_STYLES;

/// Root application component.
///
/// Provides global styles and the content section.
#[component]
pub fn App() -> Element {
    let showcase = use_hook(get_showcase);

    rsx! {
        style { {PAGE_STYLES} }
        style { {CARD_STYLES} }

        section { class: "content-section",
            div { class: "content-section__inner",
                div { class: "content-section__intro",
                    div {
                        h2 { class: "content-section__heading", "{showcase.heading}" }
                        p { class: "content-section__paragraph", "{showcase.paragraph}" }
                    }
                    a {
                        class: "content-section__cta",
                        href: "{showcase.cta_href}",
                        "{showcase.cta_label}"
                    }
                }

                CardDeck { class: Some("content-section__grid".to_string()),
                    for (key, record) in showcase.keyed_cards() {
                        ExpandableCard {
                            key: "{key}",
                            record,
                            options: showcase.card_options.clone(),
                        }
                    }
                }
            }
        }
    }
}
