//! Expandable card components
//!
//! A [`CardDeck`] owns the page coordinator and routes global input; every
//! [`ExpandableCard`] inside it mounts one card instance.

mod close_button;
mod content_body;
mod deck;
mod expandable_card;

pub use close_button::*;
pub use content_body::*;
pub use deck::*;
pub use expandable_card::*;
