//! Resolves what a tile or overlay actually shows.
//!
//! Missing images resolve to a deterministic placeholder and missing bodies
//! resolve to a fixed paragraph, so neither region is ever rendered empty.

use crate::config::ImageFallback;
use crate::record::{CardContent, CardRecord, ContentBlock};

/// Paragraph shown in the overlay when a record carries no content
pub const FALLBACK_BODY: &str =
    "More details are on the way. Check back soon for the full breakdown.";

/// CSS background for the gradient placeholder
pub const PLACEHOLDER_GRADIENT: &str = "linear-gradient(to bottom right, #262626, #171717)";

/// CSS background for the solid placeholder
pub const PLACEHOLDER_SOLID: &str = "#262626";

/// The visual region at the top of a tile or overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSurface {
    /// A real image
    Photo { src: String, alt: String },
    /// A CSS background standing in for a missing image
    Placeholder { background: &'static str },
}

impl ImageSurface {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSurface::Placeholder { .. })
    }
}

/// Resolve the image region for a record
pub fn resolve_image(record: &CardRecord, fallback: ImageFallback) -> ImageSurface {
    match record.image_ref.as_deref().map(str::trim) {
        Some(src) if !src.is_empty() => ImageSurface::Photo {
            src: src.to_string(),
            alt: record.title.clone(),
        },
        _ => ImageSurface::Placeholder {
            background: match fallback {
                ImageFallback::Gradient => PLACEHOLDER_GRADIENT,
                ImageFallback::Solid => PLACEHOLDER_SOLID,
            },
        },
    }
}

/// Resolve the overlay body for a record.
///
/// Always returns at least one visible block.
pub fn resolve_body(record: &CardRecord) -> CardContent {
    match &record.content {
        Some(content) if !content.is_blank() => CardContent::new(
            content
                .blocks
                .iter()
                .filter(|block| !block.is_blank())
                .cloned()
                .collect(),
        ),
        _ => CardContent::new(vec![ContentBlock::Paragraph(FALLBACK_BODY.to_string())]),
    }
}
