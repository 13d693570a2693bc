//! Tooltip text and hover state for plot bars.
//!
//! Each plot owns two tooltip overlays: one for the set-size bars and one for
//! the intersection bars. A [`Tooltip`] models a single overlay. It becomes
//! visible with some text when a bar is hovered, follows the pointer at a
//! fixed offset while the pointer moves, and hides again when the pointer
//! leaves the bar.
//!
//! In a browser the inline script of the HTML mount point performs these
//! transitions with the same offsets. [`Tooltip`] is the Rust model of that
//! behavior: exported plots start from a hidden `Tooltip` per overlay, and
//! the HTML exporter renders any state, including a tooltip already shown at
//! a pointer position.
//!
//! # Example
//!
//! ```
//! # use upset::tooltip::{Tooltip, TooltipKind};
//! # use upset_core::geometry::Point;
//! let mut tooltip = Tooltip::new(TooltipKind::Intersection);
//! tooltip.hover("Set1: 3 unique elements");
//! tooltip.move_to(Point::new(100.0, 200.0));
//!
//! assert!(tooltip.is_visible());
//! assert_eq!(tooltip.position(), Point::new(120.0, 180.0));
//!
//! tooltip.leave();
//! assert!(!tooltip.is_visible());
//! ```

use upset_core::geometry::Point;

use crate::{config::Palette, model::SoloSet};

/// Which bars an overlay belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TooltipKind {
    /// Horizontal per-set bars
    SetSize,
    /// Vertical intersection bars
    Intersection,
}

impl TooltipKind {
    /// Returns the offset of the overlay from the pointer, as `(left, top)`.
    pub fn offset(self) -> Point {
        match self {
            Self::SetSize => Point::new(20.0, -10.0),
            Self::Intersection => Point::new(20.0, -20.0),
        }
    }

    /// Returns the element id of this overlay inside the mount point `mount_id`.
    pub fn element_id(self, mount_id: &str) -> String {
        match self {
            Self::SetSize => format!("{mount_id}-set-tooltip"),
            Self::Intersection => format!("{mount_id}-intersection-tooltip"),
        }
    }
}

/// Returns the tooltip text of a set-size bar, e.g. `"Set1: 5 elements"`.
pub fn set_size_text(set: &SoloSet) -> String {
    format!("{}: {} elements", set.name(), set.num())
}

/// Returns the tooltip text of an intersection bar.
///
/// Intersections of a single set count elements found in no other set, so
/// they are described as "unique".
pub fn intersection_text(label: &str, num: u64, multi_set: bool) -> String {
    let plural = if num == 1 { "" } else { "s" };
    if multi_set {
        format!("{label}: {num} element{plural}")
    } else {
        format!("{label}: {num} unique element{plural}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum TooltipState {
    #[default]
    Hidden,
    Visible(String),
}

/// Hover state of one tooltip overlay.
#[derive(Debug, Clone)]
pub struct Tooltip {
    kind: TooltipKind,
    state: TooltipState,
    position: Point,
}

impl Tooltip {
    /// Creates a hidden tooltip at the origin.
    pub fn new(kind: TooltipKind) -> Self {
        Self {
            kind,
            state: TooltipState::default(),
            position: Point::default(),
        }
    }

    pub fn kind(&self) -> TooltipKind {
        self.kind
    }

    /// Shows the tooltip with `text`, replacing any text shown before.
    pub fn hover(&mut self, text: impl Into<String>) {
        self.state = TooltipState::Visible(text.into());
    }

    /// Places the tooltip next to `pointer`.
    ///
    /// The position is updated even while hidden, so the next `hover` shows
    /// the overlay where the pointer currently is.
    pub fn move_to(&mut self, pointer: Point) {
        self.position = pointer.add_point(self.kind.offset());
    }

    /// Hides the tooltip.
    pub fn leave(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible(_))
    }

    /// Returns the shown text, if visible.
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            TooltipState::Visible(text) => Some(text),
            TooltipState::Hidden => None,
        }
    }

    /// Returns the `(left, top)` position of the overlay.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// Returns the inline CSS of a hidden tooltip overlay.
pub fn overlay_style(palette: &Palette, font_size: u16) -> String {
    [
        "position: absolute".to_string(),
        "z-index: 10".to_string(),
        "visibility: hidden".to_string(),
        format!("background-color: {}", palette.active),
        format!("color: {}", palette.tooltip_text),
        "border-width: 2px".to_string(),
        "border-radius: 5px".to_string(),
        "padding: 5px".to_string(),
        format!("font-size: {font_size}px"),
        "font-weight: normal".to_string(),
    ]
    .join("; ")
}
