//! Text rendering and measurement for plot labels.
//!
//! This module provides types for configuring text appearance, rendering text
//! elements as SVG `<text>` nodes, and measuring rendered text width.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//! - [`TextMeasurer`] - Capability for measuring rendered text
//! - [`FontMeasurer`] - Measurement backed by real font metrics (cosmic-text)
//! - [`FixedWidthMeasurer`] - Deterministic measurement with a fixed glyph advance
//!
//! # Quick Start
//!
//! ```
//! # use upset_core::draw::{FixedWidthMeasurer, Text, TextDefinition, TextMeasurer};
//! let mut style = TextDefinition::new();
//! style.set_font_size(15);
//!
//! let text = Text::new(&style, "Set Size");
//! let measurer = FixedWidthMeasurer::new(0.5);
//! assert_eq!(measurer.measure(text.content(), &style).width(), 60.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Horizontal alignment of a text element relative to its position.
///
/// Maps directly to the SVG `text-anchor` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Defines the visual style for text elements in plots.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `15` (px) |
/// | Text color | `None` (inherited) |
/// | Anchor | [`TextAnchor::Start`] |
///
/// # Examples
///
/// ```
/// # use upset_core::draw::{TextAnchor, TextDefinition};
/// # use upset_core::color::Color;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut style = TextDefinition::new();
/// style.set_font_size(14);
/// style.set_anchor(TextAnchor::Middle);
/// style.set_color(Some(Color::new("#3C4856")?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the fill color. `None` inherits the color of the parent group.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal anchor.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the fill color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the horizontal anchor.
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Returns the CSS declaration for the font size, e.g. `font-size: 15px`.
    pub fn font_size_style(&self) -> String {
        format!("font-size: {}px", self.font_size)
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 15,
            color: None,
            anchor: TextAnchor::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use upset_core::draw::{Drawable, Text, TextDefinition};
/// # use upset_core::geometry::Point;
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Intersection Set Size").with_rotation(-90.0);
///
/// let output = text.render_to_layers(Point::new(-200.0, -40.0));
/// assert!(!output.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    rotation: Option<f32>,
    class: Option<&'a str>,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            rotation: None,
            class: None,
        }
    }

    /// Rotates the text by `degrees` around the origin of its parent group.
    ///
    /// As in SVG, the position is then interpreted in the rotated frame.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Sets the CSS class of the rendered element.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", self.definition.anchor().to_svg_value())
            .set("font-family", self.definition.font_family())
            .set("style", self.definition.font_size_style());

        if let Some(class) = self.class {
            rendered_text = rendered_text.set("class", class);
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text.set("fill", color);
        }

        if let Some(degrees) = self.rotation {
            rendered_text = rendered_text.set("transform", format!("rotate({degrees})"));
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}

/// Capability for measuring the rendered size of a string.
///
/// Layout only needs the width of label text. The capability is a trait so
/// that callers without system fonts (or tests) can substitute a
/// deterministic implementation.
pub trait TextMeasurer: std::fmt::Debug {
    /// Returns the size `text` occupies when rendered with `definition`.
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size;
}

/// Measures text with a fixed advance per character.
///
/// Each character is `font_size × advance` wide; lines are
/// `font_size × 1.15` high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    advance: f32,
}

impl FixedWidthMeasurer {
    /// Creates a measurer where each glyph advances `advance` ems.
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let font_size = definition.font_size() as f32;
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        Size::new(
            widest as f32 * font_size * self.advance,
            lines as f32 * font_size * 1.15,
        )
    }
}

/// Measures text using real font metrics and shaping from cosmic-text.
///
/// All instances share one lazily created [`FontSystem`], since loading the
/// system font database is expensive.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontMeasurer;

impl FontMeasurer {
    pub fn new() -> Self {
        Self
    }
}

impl TextMeasurer for FontMeasurer {
    /// Calculate the actual size of text in pixels using cosmic-text.
    ///
    /// Falls back to an estimate of `0.55 em` per character when shaping
    /// yields no layout runs (for example when no fonts are installed).
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = FONT_SYSTEM
            .get_or_init(|| {
                info!("Initializing FontSystem");
                Mutex::new(FontSystem::new())
            })
            .lock()
            .expect("failed to lock FontSystem");

        let font_size_px = definition.font_size() as f32;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = match definition.font_family() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let attrs = Attrs::new().family(family);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        } else {
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();
