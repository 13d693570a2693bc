//! Axis rendering following the d3-axis SVG structure.
//!
//! An axis is one `<g>` holding a `path.domain` line and, unless disabled,
//! one `g.tick` per tick value with a tick line and a label. Coordinates are
//! offset by half a pixel so that one-pixel strokes land on pixel centers.

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, TextAnchor, TextDefinition},
    geometry::Point,
    scale::LinearScale,
};

/// Offset applied to every coordinate for crisp one-pixel strokes.
const CRISP_OFFSET: f32 = 0.5;

/// Default number of ticks requested from the scale.
const DEFAULT_TICK_COUNT: usize = 10;

/// Gap between a tick line and its label.
const TICK_PADDING: f32 = 3.0;

/// Which side of the plot area the axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Horizontal axis, ticks and labels below the line
    Bottom,
    /// Vertical axis, ticks and labels left of the line
    Left,
}

impl AxisOrientation {
    /// Direction ticks extend in: `+1` for bottom, `-1` for left.
    fn direction(self) -> f32 {
        match self {
            Self::Bottom => 1.0,
            Self::Left => -1.0,
        }
    }

    fn default_anchor(self) -> TextAnchor {
        match self {
            Self::Bottom => TextAnchor::Middle,
            Self::Left => TextAnchor::End,
        }
    }

    fn label_dy(self) -> &'static str {
        match self {
            Self::Bottom => "0.71em",
            Self::Left => "0.32em",
        }
    }
}

/// A scale axis with tick marks and formatted tick labels.
///
/// # Examples
///
/// ```
/// # use upset_core::draw::{Axis, AxisOrientation, Drawable};
/// # use upset_core::geometry::Point;
/// # use upset_core::scale::LinearScale;
/// let scale = LinearScale::from_max(3.0, (400.0, 0.0));
/// let axis = Axis::new(AxisOrientation::Left, scale).with_tick_size(5.0);
///
/// let output = axis.render_to_layers(Point::default());
/// assert!(!output.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Axis<'a> {
    orientation: AxisOrientation,
    scale: LinearScale,
    tick_count: usize,
    tick_size_inner: f32,
    tick_size_outer: f32,
    show_ticks: bool,
    class: Option<&'a str>,
    stroke: Option<&'a StrokeDefinition>,
    label_definition: Option<&'a TextDefinition>,
    label_rotation: Option<f32>,
    label_anchor: Option<TextAnchor>,
}

impl<'a> Axis<'a> {
    pub fn new(orientation: AxisOrientation, scale: LinearScale) -> Self {
        Self {
            orientation,
            scale,
            tick_count: DEFAULT_TICK_COUNT,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            show_ticks: true,
            class: None,
            stroke: None,
            label_definition: None,
            label_rotation: None,
            label_anchor: None,
        }
    }

    /// Sets the approximate number of ticks requested from the scale.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Sets both the inner (tick) and outer (domain end) tick sizes.
    pub fn with_tick_size(mut self, size: f32) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    /// Drops the ticks, leaving only the domain line.
    pub fn without_ticks(mut self) -> Self {
        self.show_ticks = false;
        self
    }

    /// Sets the CSS class of the axis group.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Strokes the axis group. Tick labels are then explicitly unstroked.
    pub fn with_stroke(mut self, stroke: &'a StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Styles tick labels with the color and font size of `definition`.
    pub fn with_label_style(mut self, definition: &'a TextDefinition) -> Self {
        self.label_definition = Some(definition);
        self
    }

    /// Rotates every tick label by `degrees` and anchors it at `anchor`.
    pub fn with_label_rotation(mut self, degrees: f32, anchor: TextAnchor) -> Self {
        self.label_rotation = Some(degrees);
        self.label_anchor = Some(anchor);
        self
    }

    /// Returns the tick values this axis will label.
    pub fn tick_values(&self) -> Vec<f32> {
        if self.show_ticks {
            self.scale.ticks(self.tick_count)
        } else {
            Vec::new()
        }
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = self.scale.range();
        let range0 = r0 + CRISP_OFFSET;
        let range1 = r1 + CRISP_OFFSET;
        let outer = self.orientation.direction() * self.tick_size_outer;

        match (self.orientation, self.tick_size_outer != 0.0) {
            (AxisOrientation::Bottom, true) => {
                format!("M{range0},{outer}V{CRISP_OFFSET}H{range1}V{outer}")
            }
            (AxisOrientation::Bottom, false) => format!("M{range0},{CRISP_OFFSET}H{range1}"),
            (AxisOrientation::Left, true) => {
                format!("M{outer},{range0}H{CRISP_OFFSET}V{range1}H{outer}")
            }
            (AxisOrientation::Left, false) => format!("M{CRISP_OFFSET},{range0}V{range1}"),
        }
    }

    fn render_tick(&self, value: f32, label: String) -> svg_element::Group {
        let k = self.orientation.direction();
        let offset = self.scale.apply(value) + CRISP_OFFSET;
        let spacing = self.tick_size_inner.max(0.0) + TICK_PADDING;

        let (transform, line_attr, text_attr) = match self.orientation {
            AxisOrientation::Bottom => (format!("translate({offset},0)"), "y2", "y"),
            AxisOrientation::Left => (format!("translate(0,{offset})"), "x2", "x"),
        };

        let line = svg_element::Line::new()
            .set("stroke", "currentColor")
            .set(line_attr, k * self.tick_size_inner);

        let mut text = svg_element::Text::new("")
            .set("fill", "currentColor")
            .set(text_attr, k * spacing)
            .set("dy", self.orientation.label_dy());

        let mut style = Vec::new();
        if let Some(definition) = self.label_definition {
            if let Some(color) = definition.color() {
                text = text.set("fill", color);
            }
            style.push(definition.font_size_style());
        }
        if self.stroke.is_some() {
            text = text.set("stroke", "none");
        }
        if let Some(degrees) = self.label_rotation {
            text = text.set("transform", format!("rotate({degrees})"));
        }
        if let Some(anchor) = self.label_anchor {
            style.push(format!("text-anchor: {}", anchor.to_svg_value()));
        }
        if !style.is_empty() {
            text = text.set("style", style.join("; "));
        }

        svg_element::Group::new()
            .set("class", "tick")
            .set("opacity", 1)
            .set("transform", transform)
            .add(line)
            .add(text.add(SvgText::new(label)))
    }
}

impl Drawable for Axis<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut group = svg_element::Group::new()
            .set("fill", "none")
            .set("font-size", 10)
            .set("font-family", "sans-serif")
            .set("text-anchor", self.orientation.default_anchor().to_svg_value());

        if position != Point::default() {
            group = group.set("transform", position.to_translate());
        }
        if let Some(class) = self.class {
            group = group.set("class", class);
        }
        if let Some(stroke) = self.stroke {
            group = apply_stroke!(group, stroke);
        }

        group = group.add(
            svg_element::Path::new()
                .set("class", "domain")
                .set("stroke", "currentColor")
                .set("d", self.domain_path()),
        );

        let format = self.scale.tick_format(self.tick_count);
        for value in self.tick_values() {
            group = group.add(self.render_tick(value, format.format(value)));
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Axis, Box::new(group));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn render(axis: &Axis<'_>, position: Point) -> String {
        axis.render_to_layers(position)
            .render_into(svg_element::Group::new())
            .to_string()
    }

    #[test]
    fn test_bottom_domain_path() {
        let axis = Axis::new(AxisOrientation::Bottom, LinearScale::from_max(4.0, (0.0, 160.0)));
        assert_eq!(axis.domain_path(), "M0.5,6V0.5H160.5V6");
    }

    #[test]
    fn test_left_domain_path_with_tick_size() {
        let axis = Axis::new(AxisOrientation::Left, LinearScale::from_max(3.0, (400.0, 0.0)))
            .with_tick_size(5.0);
        assert_eq!(axis.domain_path(), "M-5,400.5H0.5V0.5H-5");
    }

    #[test]
    fn test_without_ticks_leaves_only_domain() {
        let axis = Axis::new(AxisOrientation::Bottom, LinearScale::from_max(4.0, (0.0, 160.0)))
            .without_ticks();
        assert!(axis.tick_values().is_empty());

        let rendered = render(&axis, Point::new(0.0, 400.0));
        assert!(rendered.contains("class=\"domain\""));
        assert!(!rendered.contains("class=\"tick\""));
        assert!(rendered.contains("translate(0, 400)"));
    }

    #[test]
    fn test_ticks_are_rendered_with_labels() {
        let axis = Axis::new(AxisOrientation::Bottom, LinearScale::from_max(10.0, (150.0, 0.0)))
            .with_tick_count(5);
        assert_eq!(axis.tick_values(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let rendered = render(&axis, Point::default());
        assert_eq!(rendered.matches("class=\"tick\"").count(), 6);
        // Reversed range: zero sits at the far end
        assert!(rendered.contains("translate(150.5,0)"));
        assert!(rendered.contains("translate(0.5,0)"));
        assert!(rendered.contains("dy=\"0.71em\""));
    }

    #[test]
    fn test_label_styling() {
        let mut labels = TextDefinition::new();
        labels.set_font_size(14);
        labels.set_color(Some(Color::new("#3C4856").unwrap()));
        let stroke = StrokeDefinition::default();

        let axis = Axis::new(AxisOrientation::Left, LinearScale::from_max(2.0, (400.0, 0.0)))
            .with_stroke(&stroke)
            .with_label_style(&labels)
            .with_label_rotation(-45.0, TextAnchor::End)
            .with_class("y axis");

        let rendered = render(&axis, Point::default());
        assert!(rendered.contains("class=\"y axis\""));
        assert!(rendered.contains("stroke=\"none\""));
        assert!(rendered.contains("rotate(-45)"));
        assert!(rendered.contains("font-size: 14px; text-anchor: end"));
        assert!(rendered.contains("dy=\"0.32em\""));
    }
}
