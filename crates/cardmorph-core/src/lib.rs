//! Card Morph Core Library
//!
//! Interaction engine for expandable cards: each card expands in place into a
//! full-detail overlay that shares its image, title and control with the
//! collapsed tile, and collapses back on escape, outside click, backdrop click
//! or its close control.
//!
//! ## Overview
//!
//! - **State**: every mounted card is `Closed` or `Open`, independently of
//!   its siblings ([`PageCoordinator`], [`CardHandle`]).
//! - **Dismissal**: an open card holds one global keyboard + pointer
//!   subscription, attached on open and detached on every way out
//!   ([`dismissal`]).
//! - **Scroll lock**: held while at least one card is open, counted across
//!   the page ([`ScrollLock`]).
//! - **Continuity**: tile and overlay elements share layout ids derived from
//!   the card's [`CorrelationId`] and morph via FLIP ([`transition`]).
//!
//! No UI toolkit is assumed; `cardmorph-ui` binds this to Dioxus.
//!
//! ## Quick Start
//!
//! ```
//! use cardmorph_core::{default_records, DismissalSource, PageCoordinator};
//!
//! let page = PageCoordinator::headless();
//! let cards: Vec<_> = default_records()
//!     .into_iter()
//!     .map(|record| page.mount(record))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! cards[1].open().unwrap();
//! assert_eq!(page.open_count(), 1);
//!
//! cards[1].close(DismissalSource::CloseControl).unwrap();
//! assert!(!page.is_scroll_locked());
//! ```

pub mod config;
pub mod content;
pub mod coordinator;
pub mod dismissal;
pub mod error;
pub mod record;
pub mod scroll_lock;
pub mod transition;
pub mod types;

// Re-exports
pub use config::{load_deck, CardOptions, DeckFile, ImageFallback, DEFAULT_MAX_CARDS};
pub use content::{resolve_body, resolve_image, ImageSurface, FALLBACK_BODY};
pub use coordinator::{CardHandle, CardInstance, PageCoordinator};
pub use dismissal::{DismissalSubscription, ListenerKind, SubscriptionTable};
pub use error::{CardError, CardResult};
pub use record::{default_records, select_records, CardContent, CardRecord, ContentBlock};
pub use scroll_lock::{
    MemoryScrollSurface, NoopScrollSurface, ScrollLock, ScrollSurface, SharedScrollSurface,
};
pub use transition::{layout_id, Flip, LayoutSnapshot, MorphPhase, MorphPlan, Rect, SharedRole, Spring};
pub use types::*;
