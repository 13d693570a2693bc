//! Plot marks: bars, matrix circles and connector lines.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// A filled rectangle positioned by its top-left corner.
///
/// A bar may carry tooltip text. It is emitted both as a `data-tooltip`
/// attribute, read by the interactive overlay, and as an SVG `<title>`
/// child, which viewers show natively on hover.
#[derive(Debug, Clone)]
pub struct Bar<'a> {
    size: Size,
    fill: Color,
    class: Option<&'a str>,
    tooltip: Option<&'a str>,
    tooltip_target: Option<&'a str>,
}

impl<'a> Bar<'a> {
    pub fn new(size: Size, fill: Color) -> Self {
        Self {
            size,
            fill,
            class: None,
            tooltip: None,
            tooltip_target: None,
        }
    }

    /// Sets the CSS class of the rendered rectangle.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Attaches hover text and the id of the overlay that displays it.
    pub fn with_tooltip(mut self, text: &'a str, target: &'a str) -> Self {
        self.tooltip = Some(text);
        self.tooltip_target = Some(target);
        self
    }
}

impl Drawable for Bar<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", &self.fill);

        if let Some(class) = self.class {
            rect = rect.set("class", class);
        }

        if let Some(tooltip) = self.tooltip {
            rect = rect
                .set("data-tooltip", tooltip)
                .add(svg_element::Title::new(tooltip));
        }

        if let Some(target) = self.tooltip_target {
            rect = rect.set("data-tooltip-target", target);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marks, Box::new(rect));
        output
    }
}

/// A filled circle positioned by its center.
#[derive(Debug, Clone)]
pub struct Circle<'a> {
    radius: f32,
    fill: Color,
    class: Option<&'a str>,
}

impl<'a> Circle<'a> {
    pub fn new(radius: f32, fill: Color) -> Self {
        Self {
            radius,
            fill,
            class: None,
        }
    }

    /// Sets the CSS class of the rendered circle.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Drawable for Circle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.radius)
            .set("fill", &self.fill);

        if let Some(class) = self.class {
            circle = circle.set("class", class);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marks, Box::new(circle));
        output
    }
}

/// A straight line between two points, relative to the render position.
///
/// Zero-length connectors are valid and still emitted.
#[derive(Debug, Clone)]
pub struct Connector<'a> {
    start: Point,
    end: Point,
    stroke: &'a StrokeDefinition,
    id: Option<String>,
}

impl<'a> Connector<'a> {
    pub fn new(start: Point, end: Point, stroke: &'a StrokeDefinition) -> Self {
        Self {
            start,
            end,
            stroke,
            id: None,
        }
    }

    /// Sets the `id` attribute of the rendered line.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Drawable for Connector<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let start = self.start.add_point(position);
        let end = self.end.add_point(position);

        let mut line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y());

        if let Some(id) = &self.id {
            line = line.set("id", id.as_str());
        }

        let line = apply_stroke!(line, self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Connector, Box::new(line));
        output
    }
}
