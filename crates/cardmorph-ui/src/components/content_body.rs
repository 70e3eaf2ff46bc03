//! Overlay body rendering

use cardmorph_core::{CardContent, ContentBlock};
use dioxus::prelude::*;

/// Renders resolved overlay content block by block
#[component]
pub fn ContentBody(content: CardContent) -> Element {
    rsx! {
        div { class: "card-overlay__body",
            for (index, block) in content.blocks.iter().enumerate() {
                {
                    match block {
                        ContentBlock::Paragraph(text) => rsx! {
                            p { key: "{index}", class: "card-body__paragraph", "{text}" }
                        },
                        ContentBlock::Heading(text) => rsx! {
                            h4 { key: "{index}", class: "card-body__heading", "{text}" }
                        },
                        ContentBlock::Quote(text) => rsx! {
                            blockquote { key: "{index}", class: "card-body__quote", "{text}" }
                        },
                        ContentBlock::List(items) => rsx! {
                            ul { key: "{index}", class: "card-body__list",
                                for item in items.iter() {
                                    li { "{item}" }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
