//! Core types for Card Morph

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Stable identity of one mounted card instance.
///
/// Ties the collapsed tile, its image, its title and its expanded overlay
/// together as a single visual object across the open/close transition.
/// Generated once when the instance is created and never derived from display
/// fields, so two cards with the same title never share an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CorrelationId(pub Ulid);

impl CorrelationId {
    /// Create a new unique CorrelationId
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create a CorrelationId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }

    /// Short lowercase form used in DOM ids and CSS names
    pub fn slug(&self) -> String {
        self.0.to_string().to_lowercase()
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// Monotonic counter identifying one raw input event on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EventTick(pub u64);

impl EventTick {
    /// The tick following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Handle naming the expanded overlay root of one open session.
///
/// A fresh anchor is issued on every open, so a stale hit path recorded
/// against a previous session never counts as "inside" the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayAnchor {
    /// Owning instance
    pub card: CorrelationId,
    /// Session counter, bumped on every open of the owning instance
    pub session: u64,
}

/// Open/closed state of a card instance.
///
/// There is no "opening"/"closing" state: the visual interpolation is layered
/// on top of this binary state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// Collapsed tile only
    #[default]
    Closed,
    /// Expanded overlay shown
    Open,
}

impl CardState {
    /// Returns whether the expanded overlay should be rendered
    pub fn is_open(&self) -> bool {
        matches!(self, CardState::Open)
    }
}

/// What caused a card to close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissalSource {
    /// Escape key delivered to the global keyboard subscription
    Escape,
    /// Pointer pressed outside the overlay anchor
    OutsidePointer,
    /// Click on the translucent backdrop layer
    Backdrop,
    /// Click on the close control inside the overlay
    CloseControl,
    /// The instance was unmounted while open
    Unmount,
    /// Closed by code rather than user input
    Programmatic,
}

impl DismissalSource {
    /// Short label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            DismissalSource::Escape => "escape",
            DismissalSource::OutsidePointer => "outside-pointer",
            DismissalSource::Backdrop => "backdrop",
            DismissalSource::CloseControl => "close-control",
            DismissalSource::Unmount => "unmount",
            DismissalSource::Programmatic => "programmatic",
        }
    }
}

impl std::fmt::Display for DismissalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable state change produced by a coordinator operation.
///
/// Operations that change nothing (opening an open card, closing a closed
/// one, an escape with no open cards) produce no transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Instance moved Closed -> Open
    Opened {
        card: CorrelationId,
        anchor: OverlayAnchor,
    },
    /// Instance moved Open -> Closed
    Closed {
        card: CorrelationId,
        source: DismissalSource,
    },
}

impl Transition {
    /// The instance this transition applies to
    pub fn card(&self) -> CorrelationId {
        match self {
            Transition::Opened { card, .. } | Transition::Closed { card, .. } => *card,
        }
    }
}

/// Keys the dismissal coordinator distinguishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Other(String),
}

impl KeyInput {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => KeyInput::Escape,
            other => KeyInput::Other(other.to_string()),
        }
    }
}
