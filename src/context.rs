//! Showcase content resolved once at startup.

use std::sync::OnceLock;

use cardmorph_core::{select_records, CardOptions, CardRecord, DeckFile, DEFAULT_MAX_CARDS};

pub const DEFAULT_HEADING: &str = "Built to inform real capital decisions";
pub const DEFAULT_PARAGRAPH: &str =
    "We focus on signals that matter and insights that create an edge before consensus.";
pub const DEFAULT_SECTION_CTA: &str = "See the research";
pub const DEFAULT_SECTION_HREF: &str = "/research";

/// Label on each card's tile control in the showcase
pub const SHOWCASE_CARD_CTA: &str = "Open";

/// Global showcase, set from the command line before launch
static SHOWCASE: OnceLock<Showcase> = OnceLock::new();

/// Everything the content section renders
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    pub heading: String,
    pub paragraph: String,
    pub cta_label: String,
    pub cta_href: String,
    pub cards: Vec<CardRecord>,
    pub card_options: CardOptions,
}

impl Showcase {
    /// Resolve a deck plus command line overrides into renderable content.
    ///
    /// An empty deck falls back to the built-in cards.
    pub fn new(deck: DeckFile, card_cta: Option<String>, max_cards: usize) -> Self {
        let card_options = CardOptions::default()
            .with_cta_label(card_cta.unwrap_or_else(|| SHOWCASE_CARD_CTA.to_string()));

        Self {
            heading: deck.heading.unwrap_or_else(|| DEFAULT_HEADING.to_string()),
            paragraph: deck
                .paragraph
                .unwrap_or_else(|| DEFAULT_PARAGRAPH.to_string()),
            cta_label: deck
                .cta_label
                .unwrap_or_else(|| DEFAULT_SECTION_CTA.to_string()),
            cta_href: deck
                .cta_href
                .unwrap_or_else(|| DEFAULT_SECTION_HREF.to_string()),
            cards: select_records(deck.cards, max_cards),
            card_options,
        }
    }

    /// Cards paired with a render key unique within the grid.
    ///
    /// Titles may repeat, so the key leads with the card's position.
    pub fn keyed_cards(&self) -> Vec<(String, CardRecord)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, record)| (format!("{}-{}", index, record.title), record.clone()))
            .collect()
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(DeckFile::default(), None, DEFAULT_MAX_CARDS)
    }
}

/// Store the showcase for the app. Only the first call wins.
pub fn set_showcase(showcase: Showcase) {
    if SHOWCASE.set(showcase).is_err() {
        tracing::warn!("Showcase already initialized, ignoring");
    }
}

/// Get the showcase (set from command line or default)
pub fn get_showcase() -> Showcase {
    SHOWCASE.get().cloned().unwrap_or_default()
}
