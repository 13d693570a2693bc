//! Intersection panel: one vertical bar per intersection, largest first.

use svg::node::element as svg_element;

use upset_core::{
    draw::{
        Axis, AxisOrientation, Bar, Drawable, LayeredOutput, StrokeDefinition, Text, TextAnchor,
    },
    geometry::Point,
};

use super::Svg;
use crate::{
    layout::Plot,
    tooltip::{self, TooltipKind},
};

/// Tick length of the intersection size axis.
const AXIS_TICK_SIZE: f32 = 5.0;

impl Svg {
    pub(super) fn render_intersections(&self, plot: &Plot<'_>) -> svg_element::Group {
        let layout = plot.layout();
        let axis_stroke = StrokeDefinition::default();

        let mut output = LayeredOutput::new();

        // The x axis is only a baseline under the bars
        let column_axis = Axis::new(AxisOrientation::Bottom, layout.column_scale())
            .without_ticks()
            .with_class("x axis")
            .with_stroke(&axis_stroke);
        output.merge(column_axis.render_to_layers(layout.column_axis_origin()));

        let tick_labels = self.text_definition(self.style.label_font_size(), TextAnchor::End);
        let size_axis = Axis::new(AxisOrientation::Left, layout.intersection_scale())
            .with_tick_size(AXIS_TICK_SIZE)
            .with_class("y axis")
            .with_stroke(&axis_stroke)
            .with_label_style(&tick_labels);
        output.merge(size_axis.render_to_layers(Point::default()));

        let caption_style =
            self.text_definition(self.style.axis_font_size(), TextAnchor::Middle);
        let caption = Text::new(&caption_style, "Intersection Set Size")
            .with_class("x label")
            .with_rotation(-90.0);
        output.merge(caption.render_to_layers(layout.intersection_caption_position()));

        let chart = self.render_chart(plot);

        output
            .render_into(svg_element::Group::new().set("id", "upsetBars"))
            .add(chart)
    }

    /// Renders the bars into the `#chart` group.
    fn render_chart(&self, plot: &Plot<'_>) -> svg_element::Group {
        let layout = plot.layout();
        let target = self.tooltip_target(TooltipKind::Intersection);

        let mut output = LayeredOutput::new();
        for (index, record) in plot.rows().iter().enumerate() {
            let (origin, size) = layout.intersection_bar(index, record.num());
            let label = record.display_label(plot.solo_sets());
            let text = tooltip::intersection_text(&label, record.num(), record.is_multi_set());

            let bar = Bar::new(size, self.palette.active)
                .with_class("bar")
                .with_tooltip(&text, &target);
            output.merge(bar.render_to_layers(origin));
        }

        output.render_into(
            svg_element::Group::new()
                .set("transform", layout.chart_origin().to_translate())
                .set("id", "chart"),
        )
    }
}

#[cfg(test)]
mod tests {
    use upset_core::draw::FixedWidthMeasurer;

    use super::*;
    use crate::{
        config::{LayoutConfig, StyleConfig},
        export::svg::SvgBuilder,
        model::{IntersectionRecord, SoloSet},
    };

    fn render(data: &[IntersectionRecord], sets: &[SoloSet]) -> String {
        let style = StyleConfig::default();
        let plot = Plot::new(
            data,
            sets,
            &LayoutConfig::default(),
            &style,
            &FixedWidthMeasurer::default(),
        );
        let svg = SvgBuilder::new().with_style(&style).build().unwrap();
        svg.render_intersections(&plot).to_string()
    }

    #[test]
    fn test_bars_are_sorted_and_scaled() {
        let data = vec![
            IntersectionRecord::new("AB", 2),
            IntersectionRecord::new("A", 3),
        ];
        let sets = vec![SoloSet::new("Set1", 5), SoloSet::new("Set2", 3)];
        let rendered = render(&data, &sets);

        assert_eq!(rendered.matches("class=\"bar\"").count(), 2);
        let first = rendered.find("Set1: 3 unique elements").unwrap();
        let second = rendered.find("Set1 ∩ Set2: 2 elements").unwrap();
        assert!(first < second);

        assert!(rendered.contains("height=\"400\""));
        assert!(rendered.contains("x=\"9\""));
        assert!(rendered.contains("width=\"20\""));
        assert!(rendered.contains("data-tooltip-target=\"plot-intersection-tooltip\""));
    }

    #[test]
    fn test_axes_and_caption() {
        let data = vec![IntersectionRecord::new("A", 3)];
        let sets = vec![SoloSet::new("Set1", 5)];
        let rendered = render(&data, &sets);

        assert!(rendered.contains("id=\"upsetBars\""));
        assert!(rendered.contains("class=\"x axis\""));
        assert!(rendered.contains("class=\"y axis\""));
        assert!(rendered.contains("translate(0, 400)"));
        assert!(rendered.contains("M-5,400.5H0.5V0.5H-5"));
        assert!(rendered.contains(">Intersection Set Size<"));
        assert!(rendered.contains("rotate(-90)"));
        assert!(rendered.contains("x=\"-200\""));
        assert!(rendered.contains("y=\"-40\""));
        assert!(rendered.contains("id=\"chart\""));
        assert!(rendered.contains("translate(1, 0)"));
    }

    #[test]
    fn test_custom_name_is_used_in_tooltip() {
        let data = vec![IntersectionRecord::new("AB", 1).with_name("Both")];
        let sets = vec![SoloSet::new("Set1", 5), SoloSet::new("Set2", 3)];
        let rendered = render(&data, &sets);
        assert!(rendered.contains("data-tooltip=\"Both: 1 element\""));
    }
}
