//! Card Morph UI Components
//!
//! Dioxus bindings for the `cardmorph-core` interaction engine.
//!
//! ## Pieces
//!
//! - [`CardDeck`]: page root, owns the coordinator and forwards pointer input
//!   and document key presses to open cards
//! - [`ExpandableCard`]: collapsed tile, backdrop and expanded overlay for one
//!   record
//! - [`DocumentScrollSurface`]: scroll lock on the webview's document body,
//!   shared by every deck through [`document_scroll`]
//! - [`DocumentKeyListener`]: `keydown` listener on the document while a
//!   card is open
//! - [`CARD_STYLES`]: stylesheet the components expect

pub mod components;
pub mod keyboard;
pub mod morph;
pub mod scroll;
pub mod styles;

pub use components::*;
pub use keyboard::DocumentKeyListener;
pub use morph::{use_morph, MorphController};
pub use scroll::{document_scroll, DocumentScrollSurface};
pub use styles::CARD_STYLES;
