//! Shared-element transition geometry.
//!
//! The collapsed tile and the expanded overlay are two separate render trees.
//! Elements playing the same role in both (frame, image, title, description,
//! control) are tied together by a layout id derived from the card's
//! correlation id. On open the overlay's elements are first drawn with an
//! inverted transform that puts them exactly over their tile counterparts,
//! then released to their natural position (FLIP).
//!
//! None of this feeds back into [`CardState`](crate::types::CardState): the
//! state is already final when the animation starts.

use std::collections::BTreeMap;

use crate::types::CorrelationId;

/// Element roles shared between tile and overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SharedRole {
    Frame,
    Image,
    Title,
    Description,
    Control,
}

impl SharedRole {
    pub const ALL: [SharedRole; 5] = [
        SharedRole::Frame,
        SharedRole::Image,
        SharedRole::Title,
        SharedRole::Description,
        SharedRole::Control,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            SharedRole::Frame => "card",
            SharedRole::Image => "image",
            SharedRole::Title => "title",
            SharedRole::Description => "description",
            SharedRole::Control => "button",
        }
    }

    /// Spring driving this role's motion
    pub fn spring(&self) -> Spring {
        match self {
            SharedRole::Control => Spring::CONTROL,
            _ => Spring::FRAME,
        }
    }
}

/// Layout id tying `role` of card `id` across both render trees.
///
/// Unique per instance, so two cards with the same title never morph into
/// each other.
pub fn layout_id(role: SharedRole, id: &CorrelationId) -> String {
    format!("{}-{}", role.prefix(), id.slug())
}

/// Axis-aligned rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Linear interpolation toward `to`; `t` is clamped to `[0, 1]`
    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rect {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
        }
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Damped spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Card frame, image and text
    pub const FRAME: Spring = Spring {
        stiffness: 400.0,
        damping: 30.0,
        mass: 1.0,
    };

    /// Call-to-action / close control
    pub const CONTROL: Spring = Spring {
        stiffness: 500.0,
        damping: 30.0,
        mass: 1.0,
    };

    /// Approximate time in seconds for the spring to settle within 2%
    pub fn settle_secs(&self) -> f64 {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());
        4.0 / (zeta * omega)
    }

    /// CSS transition approximating this spring on `property`
    pub fn css_transition(&self, property: &str) -> String {
        let ms = (self.settle_secs() * 1000.0).round() as u64;
        format!("{} {}ms cubic-bezier(0.22, 1, 0.36, 1)", property, ms)
    }
}

/// Inverted transform placing an element laid out at `last` over `first`.
///
/// Assumes `transform-origin: top left`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flip {
    pub dx: f64,
    pub dy: f64,
    pub sx: f64,
    pub sy: f64,
}

impl Flip {
    pub const IDENTITY: Flip = Flip {
        dx: 0.0,
        dy: 0.0,
        sx: 1.0,
        sy: 1.0,
    };

    /// Transform from `last` (where the element is) back to `first` (where it
    /// appeared to be). Degenerate rects only translate.
    pub fn between(first: &Rect, last: &Rect) -> Flip {
        let (sx, sy) = if first.has_area() && last.has_area() {
            (first.width / last.width, first.height / last.height)
        } else {
            (1.0, 1.0)
        };
        Flip {
            dx: first.x - last.x,
            dy: first.y - last.y,
            sx,
            sy,
        }
    }

    /// Transform at `progress` of the release (0 = inverted, 1 = identity)
    pub fn at(&self, progress: f64) -> Flip {
        let t = progress.clamp(0.0, 1.0);
        Flip {
            dx: self.dx * (1.0 - t),
            dy: self.dy * (1.0 - t),
            sx: self.sx + (1.0 - self.sx) * t,
            sy: self.sy + (1.0 - self.sy) * t,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Flip::IDENTITY
    }

    pub fn css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}, {:.4})",
            self.dx, self.dy, self.sx, self.sy
        )
    }
}

/// Measured rects of one render tree, by role
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    rects: BTreeMap<SharedRole, Rect>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, role: SharedRole, rect: Rect) {
        self.rects.insert(role, rect);
    }

    pub fn get(&self, role: SharedRole) -> Option<&Rect> {
        self.rects.get(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Per-role inverted transforms for one open transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphPlan {
    flips: BTreeMap<SharedRole, Flip>,
}

impl MorphPlan {
    /// Plan the morph from tile to overlay. Roles measured on only one side
    /// (e.g. no description) are not animated.
    pub fn between(tile: &LayoutSnapshot, overlay: &LayoutSnapshot) -> Self {
        let flips = SharedRole::ALL
            .iter()
            .filter_map(|role| {
                let first = tile.get(*role)?;
                let last = overlay.get(*role)?;
                Some((*role, Flip::between(first, last)))
            })
            .collect();
        Self { flips }
    }

    pub fn flip(&self, role: SharedRole) -> Flip {
        self.flips.get(&role).copied().unwrap_or(Flip::IDENTITY)
    }

    pub fn roles(&self) -> impl Iterator<Item = SharedRole> + '_ {
        self.flips.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }
}

/// Where the overlay is in its entry animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphPhase {
    /// No transform applied
    #[default]
    Settled,
    /// Mounted but not yet measured; kept invisible
    Measuring,
    /// Drawn over the tile, no transition yet
    Inverted,
    /// Releasing toward the natural layout
    Playing,
}

impl MorphPhase {
    /// Inline style for `role` in this phase
    pub fn style(&self, plan: &MorphPlan, role: SharedRole) -> String {
        match self {
            MorphPhase::Settled => String::new(),
            MorphPhase::Measuring => "opacity: 0;".to_string(),
            MorphPhase::Inverted => format!(
                "transform-origin: top left; transform: {}; transition: none;",
                plan.flip(role).css()
            ),
            MorphPhase::Playing => format!(
                "transform-origin: top left; transform: none; transition: {};",
                role.spring().css_transition("transform")
            ),
        }
    }
}
