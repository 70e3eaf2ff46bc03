//! Presentation options and deck files.
//!
//! Nothing here affects the open/close state machine. The options only
//! change labels, fallbacks and extra CSS classes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CardResult;
use crate::record::CardRecord;

/// Default call-to-action label on the collapsed tile
pub const DEFAULT_CTA_LABEL: &str = "+";

/// Default glyph of the close control inside the overlay (multiplication sign)
pub const DEFAULT_CLOSE_GLYPH: &str = "\u{00D7}";

/// Default number of cards the showcase displays
pub const DEFAULT_MAX_CARDS: usize = 3;

/// Background used when a record has no image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFallback {
    /// Diagonal dark gradient
    #[default]
    Gradient,
    /// Flat dark fill
    Solid,
}

/// Per-card presentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardOptions {
    /// Label of the tile's call-to-action control
    pub cta_label: String,
    /// Glyph of the overlay close control
    pub close_glyph: String,
    /// Background when the record has no image
    pub image_fallback: ImageFallback,
    /// Extra classes on the collapsed tile
    pub class_name: Option<String>,
    /// Extra classes on the expanded overlay
    pub class_name_expanded: Option<String>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            cta_label: DEFAULT_CTA_LABEL.to_string(),
            close_glyph: DEFAULT_CLOSE_GLYPH.to_string(),
            image_fallback: ImageFallback::default(),
            class_name: None,
            class_name_expanded: None,
        }
    }
}

impl CardOptions {
    pub fn with_cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = label.into();
        self
    }
}

/// JSON deck file consumed by the showcase
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckFile {
    pub heading: Option<String>,
    pub paragraph: Option<String>,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
    pub cards: Vec<CardRecord>,
}

impl DeckFile {
    /// Parse a deck from JSON text, validating every record
    pub fn from_json(text: &str) -> CardResult<Self> {
        let deck: DeckFile = serde_json::from_str(text)?;
        for card in &deck.cards {
            card.validate()?;
        }
        Ok(deck)
    }
}

/// Read and parse a deck file from disk
pub fn load_deck(path: impl AsRef<Path>) -> CardResult<DeckFile> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let deck = DeckFile::from_json(&text)?;
    tracing::info!(path = %path.display(), cards = deck.cards.len(), "Loaded card deck");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    #[test]
    fn options_defaults() {
        let options = CardOptions::default();
        assert_eq!(options.cta_label, "+");
        assert_eq!(options.close_glyph, "\u{00D7}");
        assert_eq!(options.image_fallback, ImageFallback::Gradient);
        assert!(options.class_name.is_none());
    }

    #[test]
    fn options_partial_json() {
        let options: CardOptions =
            serde_json::from_str(r#"{"ctaLabel": "Open", "imageFallback": "solid"}"#).unwrap();
        assert_eq!(options.cta_label, "Open");
        assert_eq!(options.image_fallback, ImageFallback::Solid);
        assert_eq!(options.close_glyph, DEFAULT_CLOSE_GLYPH);
    }

    #[test]
    fn deck_rejects_blank_titles() {
        let err = DeckFile::from_json(r#"{"cards": [{"title": ""}]}"#).unwrap_err();
        assert!(matches!(err, CardError::EmptyTitle));
    }

    #[test]
    fn deck_rejects_malformed_json() {
        let err = DeckFile::from_json("{ cards: ").unwrap_err();
        assert!(matches!(err, CardError::Deck(_)));
    }

    #[test]
    fn load_deck_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(
            &path,
            r#"{"heading": "Research", "cards": [{"title": "One"}, {"title": "Two"}]}"#,
        )
        .unwrap();

        let deck = load_deck(&path).unwrap();
        assert_eq!(deck.heading.as_deref(), Some("Research"));
        assert_eq!(deck.cards.len(), 2);
    }

    #[test]
    fn load_missing_deck_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_deck(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }
}
