//! Drawing primitives for UpSet plots.
//!
//! This module provides the building blocks every plot panel is assembled
//! from. All primitives implement the [`Drawable`] trait, which renders them
//! to a [`LayeredOutput`] at a given position.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered when
//! the panel is turned into SVG groups. Matrix connectors, for example, always
//! end up above the circles they join regardless of the drawing order.

mod axis;
mod layer;
mod mark;
mod stroke;
mod text;

pub use axis::{Axis, AxisOrientation};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use mark::{Bar, Circle, Connector};
pub use stroke::StrokeDefinition;
pub use text::{FixedWidthMeasurer, FontMeasurer, Text, TextAnchor, TextDefinition, TextMeasurer};

use crate::geometry::Point;

/// Trait for plot elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Simple drawables typically emit to a single layer, while composite
    /// drawables (such as an [`Axis`]) may emit a whole group to one layer.
    ///
    /// # Arguments
    ///
    /// * `position` - The position where this drawable should be rendered
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
