//! Membership matrix: a column of circles per intersection and a line
//! joining the sets it combines.

use svg::node::element as svg_element;

use upset_core::{
    draw::{Circle, Connector, Drawable, LayeredOutput, StrokeDefinition},
    geometry::Point,
};

use super::Svg;
use crate::layout::Plot;

impl Svg {
    pub(super) fn render_matrix(&self, plot: &Plot<'_>) -> svg_element::Group {
        let layout = plot.layout();
        let stroke = StrokeDefinition::solid(self.palette.active, layout.connector_width());

        let mut output = LayeredOutput::new();
        for (column, record) in plot.rows().iter().enumerate() {
            let class = format!("set-{}", record.set_name());

            for row in 0..layout.set_count() {
                let fill = if record.contains_set(row) {
                    self.palette.active
                } else {
                    self.palette.inactive
                };
                let circle = Circle::new(layout.radius(), fill).with_class(&class);
                output.merge(circle.render_to_layers(layout.matrix_cell(column, row)));
            }

            // Spans the letters as written, so "CA" draws the same line as "AC"
            if let Some((first, last)) = record.letter_span() {
                let connector = Connector::new(
                    layout.matrix_cell(column, first),
                    layout.matrix_cell(column, last),
                    &stroke,
                )
                .with_id(format!("setline{column}"));
                output.merge(connector.render_to_layers(Point::default()));
            }
        }

        output.render_into(
            svg_element::Group::new()
                .set("id", "upsetCircles")
                .set("transform", layout.matrix_origin().to_translate()),
        )
    }
}
