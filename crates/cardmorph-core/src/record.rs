//! Card records supplied by the render surface.
//!
//! Records are immutable display data. The core reads them to build tiles and
//! overlays but never writes back.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// One block of rich overlay content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph(String),
    Heading(String),
    Quote(String),
    List(Vec<String>),
}

impl ContentBlock {
    /// Whether the block would render as nothing visible
    pub fn is_blank(&self) -> bool {
        match self {
            ContentBlock::Paragraph(text)
            | ContentBlock::Heading(text)
            | ContentBlock::Quote(text) => text.trim().is_empty(),
            ContentBlock::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

/// Rich body rendered inside the expanded overlay
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardContent {
    pub blocks: Vec<ContentBlock>,
}

impl CardContent {
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }

    /// Single-paragraph content
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(vec![ContentBlock::Paragraph(text.into())])
    }

    /// True when there is nothing visible to render
    pub fn is_blank(&self) -> bool {
        self.blocks.iter().all(ContentBlock::is_blank)
    }
}

/// Display data for one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Display key shown on the tile and the overlay header
    pub title: String,
    /// Optional subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image URL; absent renders the placeholder background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Optional rich body; absent renders the fallback paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CardContent>,
}

impl CardRecord {
    /// Record with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_ref: None,
            content: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_content(mut self, content: CardContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Reject records the tile cannot label
    pub fn validate(&self) -> CardResult<()> {
        if self.title.trim().is_empty() {
            return Err(CardError::EmptyTitle);
        }
        Ok(())
    }
}

/// Records shown when the render surface supplies none
pub fn default_records() -> Vec<CardRecord> {
    vec![
        CardRecord::new("Actionable Signals")
            .with_description("Surface leading indicators with high signal-to-noise.")
            .with_image("https://images.unsplash.com/photo-1520607162513-77705c0f0d4a?q=80&w=1600&auto=format&fit=crop"),
        CardRecord::new("Structured Depth")
            .with_description("Layered analysis that stays consistent across updates.")
            .with_image("https://images.unsplash.com/photo-1477337819265-12f546b3c052?q=80&w=1600&auto=format&fit=crop"),
        CardRecord::new("Competitive Edge")
            .with_description("Get to conviction faster than consensus.")
            .with_image("https://images.unsplash.com/photo-1516245834210-c4c142787335?q=80&w=1600&auto=format&fit=crop"),
    ]
}

/// Pick the records to display: the supplied ones truncated to `limit`, or the
/// built-in defaults when none were supplied.
pub fn select_records(supplied: Vec<CardRecord>, limit: usize) -> Vec<CardRecord> {
    let mut records = if supplied.is_empty() {
        default_records()
    } else {
        supplied
    };
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_camel_case() {
        let json = r#"{
            "title": "Depth",
            "description": "Layers",
            "imageRef": "https://example.com/a.png",
            "content": [
                {"kind": "heading", "value": "Why"},
                {"kind": "list", "value": ["one", "two"]}
            ]
        }"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Depth");
        assert_eq!(record.image_ref.as_deref(), Some("https://example.com/a.png"));
        let content = record.content.unwrap();
        assert_eq!(content.blocks.len(), 2);
        assert_eq!(
            content.blocks[1],
            ContentBlock::List(vec!["one".to_string(), "two".to_string()])
        );
    }

    #[test]
    fn optional_fields_default_to_none() {
        let record: CardRecord = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert_eq!(record, CardRecord::new("Bare"));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(matches!(
            CardRecord::new("   ").validate(),
            Err(CardError::EmptyTitle)
        ));
        assert!(CardRecord::new("ok").validate().is_ok());
    }

    #[test]
    fn blank_content_detection() {
        assert!(CardContent::default().is_blank());
        assert!(CardContent::paragraph("  ").is_blank());
        assert!(CardContent::new(vec![ContentBlock::List(vec![" ".into()])]).is_blank());
        assert!(!CardContent::paragraph("text").is_blank());
    }

    #[test]
    fn select_uses_defaults_when_empty() {
        let records = select_records(Vec::new(), 3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Actionable Signals");
    }

    #[test]
    fn select_truncates_supplied() {
        let supplied = (0..5).map(|i| CardRecord::new(format!("card {}", i))).collect();
        let records = select_records(supplied, 3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].title, "card 2");
    }
}
