//! Base-set panel: set names, horizontal size bars and their axis.

use svg::node::element as svg_element;

use upset_core::{
    draw::{Axis, AxisOrientation, Bar, Drawable, LayeredOutput, Text, TextAnchor},
    geometry::Point,
};

use super::Svg;
use crate::{
    layout::Plot,
    tooltip::{self, TooltipKind},
};

/// Number of ticks requested for the set-size axis.
const AXIS_TICKS: usize = 5;

/// Rotation of the set-size axis labels, in degrees.
const AXIS_LABEL_ROTATION: f32 = -45.0;

impl Svg {
    /// Renders one label per base set, top to bottom in input order.
    pub(super) fn render_set_labels(&self, plot: &Plot<'_>) -> svg_element::Group {
        let layout = plot.layout();
        let definition =
            self.text_definition(self.style.label_font_size(), TextAnchor::Start);

        let mut output = LayeredOutput::new();
        for (index, set) in plot.solo_sets().iter().enumerate() {
            let label = Text::new(&definition, set.name());
            output.merge(label.render_to_layers(Point::new(0.0, layout.set_label_y(index))));
        }

        output.render_into(
            svg_element::Group::new()
                .set("id", "setLabelsGroup")
                .set("transform", layout.set_labels_origin().to_translate()),
        )
    }

    /// Renders the set-size bars, the reversed size axis and the caption.
    pub(super) fn render_set_bars(&self, plot: &Plot<'_>) -> svg_element::Group {
        let layout = plot.layout();
        let target = self.tooltip_target(TooltipKind::SetSize);

        let mut output = LayeredOutput::new();
        for (index, set) in plot.solo_sets().iter().enumerate() {
            let (origin, size) = layout.set_bar(index, set.num());
            let text = tooltip::set_size_text(set);
            let bar = Bar::new(size, self.palette.active).with_tooltip(&text, &target);
            output.merge(bar.render_to_layers(origin));
        }

        // Longer bars extend left, so the axis counts up from right to left
        let mut tick_labels = self.text_definition(self.style.axis_font_size(), TextAnchor::End);
        tick_labels.set_color(None);
        let axis = Axis::new(AxisOrientation::Bottom, layout.set_scale().reversed())
            .with_tick_count(AXIS_TICKS)
            .with_label_style(&tick_labels)
            .with_label_rotation(AXIS_LABEL_ROTATION, TextAnchor::End);
        output.merge(axis.render_to_layers(layout.set_axis_origin()));

        let caption_style =
            self.text_definition(self.style.label_font_size(), TextAnchor::Middle);
        let caption = Text::new(&caption_style, "Set Size").with_class("x label");
        output.merge(caption.render_to_layers(layout.set_caption_position()));

        output.render_into(
            svg_element::Group::new()
                .set("id", "barsGroup")
                .set("transform", layout.set_bars_origin().to_translate()),
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

    fn sample() -> (Vec<IntersectionRecord>, Vec<SoloSet>) {
        (
            vec![IntersectionRecord::new("A", 3)],
            vec![SoloSet::new("Reads", 10), SoloSet::new("Writes", 4)],
        )
    }

    fn render_with<F>(render: F) -> String
    where
        F: Fn(&Svg, &Plot<'_>) -> svg_element::Group,
    {
        let (data, sets) = sample();
        let style = StyleConfig::default();
        let plot = Plot::new(
            &data,
            &sets,
            &LayoutConfig::default(),
            &style,
            &FixedWidthMeasurer::new(0.5),
        );
        let svg = SvgBuilder::new().with_style(&style).build().unwrap();
        render(&svg, &plot).to_string()
    }

    #[test]
    fn test_labels() {
        let rendered = render_with(|svg, plot| svg.render_set_labels(plot));

        // "AAAAA" at 15px is 37.5 wide
        assert!(rendered.contains("translate(-67.5, 440)"));
        assert!(rendered.contains(">Reads<"));
        assert!(rendered.contains(">Writes<"));
        assert!(rendered.contains("text-anchor=\"start\""));
        assert!(rendered.contains("y=\"5\""));
        assert!(rendered.contains("y=\"40.1\""));
        assert!(rendered.contains("font-size: 15px"));
    }

    #[test]
    fn test_bars_and_tooltips() {
        let rendered = render_with(|svg, plot| svg.render_set_bars(plot));

        assert!(rendered.contains("id=\"barsGroup\""));
        assert!(rendered.contains("translate(-217.5, 440)"));
        assert_eq!(rendered.matches("<rect").count(), 2);
        assert!(rendered.contains("width=\"150\""));
        assert!(rendered.contains("width=\"60\""));
        assert!(rendered.contains("data-tooltip=\"Reads: 10 elements\""));
        assert!(rendered.contains("data-tooltip=\"Writes: 4 elements\""));
        assert!(rendered.contains("data-tooltip-target=\"plot-set-tooltip\""));
    }

    #[test]
    fn test_axis_and_caption() {
        let rendered = render_with(|svg, plot| svg.render_set_bars(plot));

        assert!(rendered.contains("class=\"domain\""));
        assert!(rendered.contains("rotate(-45)"));
        assert!(rendered.contains("font-size: 14px; text-anchor: end"));
        assert!(rendered.contains(">Set Size<"));
        assert!(rendered.contains("class=\"x label\""));
        assert!(rendered.contains("x=\"75\""));
    }
}
