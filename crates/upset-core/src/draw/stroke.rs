//! Stroke definitions for axis lines and matrix connectors.
//!
//! # Quick Start
//!
//! ```
//! use upset_core::draw::StrokeDefinition;
//! use upset_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::solid(Color::new("#02577b").unwrap(), 4.0);
//! let line = svg_element::Line::new()
//!     .set("x1", 0)
//!     .set("x2", 0);
//!
//! // Apply stroke color, opacity and width at once
//! let line = upset_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// A stroke definition for rendering lines.
///
/// # Examples
///
/// ```
/// use upset_core::draw::StrokeDefinition;
/// use upset_core::color::Color;
///
/// // Default stroke (black, 1px)
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// let connector = StrokeDefinition::solid(Color::new("#02577b").unwrap(), 4.0);
/// assert_eq!(connector.width(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width in pixels.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply stroke attributes to an SVG element.
///
/// Sets `stroke` and `stroke-width`, plus `stroke-opacity` for translucent
/// colors.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width());

        if $stroke.color().alpha() < 1.0 {
            elem = elem.set("stroke-opacity", $stroke.color().alpha());
        }

        elem
    }};
}
