//! Plot geometry planning.
//!
//! [`PlotLayout::plan`] turns the input lengths, the largest counts and the
//! measured width of the longest set label into every dimension, scale and
//! panel origin the exporters need. Nothing here depends on the order of the
//! intersection records, only on their counts.

use log::{debug, info, trace};

use upset_core::{
    draw::{TextDefinition, TextMeasurer},
    geometry::{Insets, Point, Size},
    scale::LinearScale,
};

use crate::{
    config::{LayoutConfig, StyleConfig},
    model::{IntersectionRecord, SoloSet, sorted_by_count},
};

/// Horizontal gap between the set labels and the plot area.
const LABEL_GAP: f32 = 30.0;

/// Vertical gap between the intersection bars and the matrix.
const MATRIX_GAP: f32 = 40.0;

/// Horizontal shift of the matrix relative to the intersection bars.
const MATRIX_INSET: f32 = 20.0;

/// Horizontal shift of the set-size bars, leaving room for the axis end tick.
const SET_BAR_INSET: f32 = 10.0;

/// Horizontal offset of the first intersection bar inside the chart group.
const BAR_INSET: f32 = 9.0;

/// Baseline offset of set labels relative to the matrix row centers.
const LABEL_BASELINE: f32 = 5.0;

/// Resolved geometry of one plot.
#[derive(Debug, Clone)]
pub struct PlotLayout {
    intersection_count: usize,
    set_count: usize,
    width: f32,
    height: f32,
    margin: Insets,
    svg_size: Size,
    text_width: f32,
    set_scale: LinearScale,
    intersection_scale: LinearScale,
    column_scale: LinearScale,
    layout: LayoutConfig,
}

impl PlotLayout {
    /// Plans the plot for `data` and `solo_sets`.
    ///
    /// `text_width` is the rendered width, in the label font, of a word one
    /// character shorter than the longest set name. It shifts the set labels
    /// and bars far enough left to keep the names clear of the matrix.
    pub fn plan(
        data: &[IntersectionRecord],
        solo_sets: &[SoloSet],
        layout: &LayoutConfig,
        style: &StyleConfig,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let intersection_count = data.len();
        let set_count = solo_sets.len();
        let margin = layout.margin();

        let width = layout.column_width() * intersection_count as f32;
        let height = layout.height();
        let svg_size = Size::new(
            width + margin.horizontal_sum(),
            height + margin.vertical_sum() + layout.row_height() * set_count as f32,
        );

        let text_width = label_offset_width(solo_sets, style, measurer);

        let max_set = solo_sets.iter().map(SoloSet::num).max().unwrap_or(0);
        let max_intersection = data.iter().map(IntersectionRecord::num).max().unwrap_or(0);

        let set_scale = LinearScale::from_max(max_set as f32, (0.0, layout.set_bar_length()));
        let intersection_scale = LinearScale::from_max(max_intersection as f32, (height, 0.0));
        let column_scale = LinearScale::from_max(intersection_count as f32, (0.0, width));

        info!(
            intersections = intersection_count,
            sets = set_count,
            width = svg_size.width(),
            height = svg_size.height();
            "Plot planned"
        );
        debug!(text_width, max_set, max_intersection; "Plot scales");

        Self {
            intersection_count,
            set_count,
            width,
            height,
            margin,
            svg_size,
            text_width,
            set_scale,
            intersection_scale,
            column_scale,
            layout: layout.clone(),
        }
    }

    /// Returns the number of intersection columns.
    pub fn intersection_count(&self) -> usize {
        self.intersection_count
    }

    /// Returns the number of base-set rows.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the width of the intersection bar area.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height of the intersection bar area.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> Insets {
        self.margin
    }

    /// Returns the `width` and `height` attributes of the SVG element.
    pub fn svg_size(&self) -> Size {
        self.svg_size
    }

    /// Returns the measured label offset width.
    pub fn text_width(&self) -> f32 {
        self.text_width
    }

    pub fn radius(&self) -> f32 {
        self.layout.radius()
    }

    pub fn pitch(&self) -> f32 {
        self.layout.pitch()
    }

    pub fn bar_width(&self) -> f32 {
        self.layout.bar_width()
    }

    pub fn set_bar_length(&self) -> f32 {
        self.layout.set_bar_length()
    }

    pub fn connector_width(&self) -> f32 {
        self.layout.connector_width()
    }

    /// Maps set sizes onto set-bar lengths.
    pub fn set_scale(&self) -> LinearScale {
        self.set_scale
    }

    /// Maps intersection sizes onto the `y` of the bar tops.
    pub fn intersection_scale(&self) -> LinearScale {
        self.intersection_scale
    }

    /// Maps column positions onto the intersection bar area.
    pub fn column_scale(&self) -> LinearScale {
        self.column_scale
    }

    /// Returns the offset of matrix row or column `index` from the first one.
    pub fn grid_offset(&self, index: usize) -> f32 {
        self.layout.grid_offset(index)
    }

    /// Returns the `transform` of the root group.
    pub fn root_transform(&self) -> String {
        format!(
            "translate({},{})scale({})",
            self.margin.left(),
            self.margin.top(),
            self.layout.canvas_scale()
        )
    }

    /// Returns the `y` where the set panel and matrix start.
    fn lower_panel_top(&self) -> f32 {
        self.height + MATRIX_GAP
    }

    /// Origin of the set label column.
    pub fn set_labels_origin(&self) -> Point {
        Point::new(-(self.text_width + LABEL_GAP), self.lower_panel_top())
    }

    /// Baseline `y` of the label of set `index`, relative to the label column.
    pub fn set_label_y(&self, index: usize) -> f32 {
        LABEL_BASELINE + self.grid_offset(index)
    }

    /// Origin of the set-size bars.
    pub fn set_bars_origin(&self) -> Point {
        let longest_bar = self.set_scale.apply(self.set_scale.domain().1);
        Point::new(
            -(self.text_width + longest_bar + LABEL_GAP),
            self.lower_panel_top(),
        )
    }

    /// Top-left corner and size of the bar of a set with `num` elements in row `index`.
    pub fn set_bar(&self, index: usize, num: u64) -> (Point, Size) {
        let length = self.set_scale.apply(num as f32);
        let origin = Point::new(
            self.set_bar_length() - length - SET_BAR_INSET,
            self.grid_offset(index) - self.radius() / 2.0,
        );
        (origin, Size::new(length, self.radius()))
    }

    /// Position of the set-size axis, relative to the set-size bars.
    pub fn set_axis_origin(&self) -> Point {
        Point::new(
            -SET_BAR_INSET,
            self.grid_offset(self.set_count) - self.radius(),
        )
    }

    /// Position of the "Set Size" caption, relative to the set-size bars.
    pub fn set_caption_position(&self) -> Point {
        Point::new(
            self.set_bar_length() / 2.0,
            self.grid_offset(self.set_count) + self.radius() * 2.0,
        )
    }

    /// Position of the intersection x axis.
    pub fn column_axis_origin(&self) -> Point {
        Point::new(0.0, self.height)
    }

    /// Position of the rotated "Intersection Set Size" caption.
    pub fn intersection_caption_position(&self) -> Point {
        Point::new(-(self.height / 2.0), -MATRIX_GAP)
    }

    /// Position of the chart group holding the intersection bars.
    pub fn chart_origin(&self) -> Point {
        Point::new(1.0, 0.0)
    }

    /// Top-left corner and size of the bar of column `index` with `num` elements.
    pub fn intersection_bar(&self, index: usize, num: u64) -> (Point, Size) {
        let top = self.intersection_scale.apply(num as f32);
        (
            Point::new(BAR_INSET + self.grid_offset(index), top),
            Size::new(self.bar_width(), self.height - top),
        )
    }

    /// Origin of the membership matrix.
    pub fn matrix_origin(&self) -> Point {
        Point::new(MATRIX_INSET, self.lower_panel_top())
    }

    /// Center of the matrix circle in column `column` and row `row`.
    pub fn matrix_cell(&self, column: usize, row: usize) -> Point {
        Point::new(self.grid_offset(column), self.grid_offset(row))
    }
}

/// A plot ready for export: the records in display order plus their geometry.
#[derive(Debug, Clone)]
pub struct Plot<'a> {
    layout: PlotLayout,
    rows: Vec<&'a IntersectionRecord>,
    solo_sets: &'a [SoloSet],
}

impl<'a> Plot<'a> {
    /// Orders `data` by descending count and plans the geometry.
    ///
    /// The records are expected to be validated already.
    pub fn new(
        data: &'a [IntersectionRecord],
        solo_sets: &'a [SoloSet],
        config: &LayoutConfig,
        style: &StyleConfig,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let rows = sorted_by_count(data);
        trace!(order:? = rows.iter().map(|row| row.set_name()).collect::<Vec<_>>(); "Intersection order");

        Self {
            layout: PlotLayout::plan(data, solo_sets, config, style, measurer),
            rows,
            solo_sets,
        }
    }

    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Returns the intersection records, largest first.
    pub fn rows(&self) -> &[&'a IntersectionRecord] {
        &self.rows
    }

    pub fn solo_sets(&self) -> &'a [SoloSet] {
        self.solo_sets
    }
}

/// Measures a word of `'A'`s one shorter than the longest set name.
fn label_offset_width(
    solo_sets: &[SoloSet],
    style: &StyleConfig,
    measurer: &dyn TextMeasurer,
) -> f32 {
    let longest = solo_sets
        .iter()
        .map(|set| set.name().chars().count())
        .max()
        .unwrap_or(0);
    let word = "A".repeat(longest.saturating_sub(1));

    let mut definition = TextDefinition::new();
    definition.set_font_family(style.font_family());
    definition.set_font_size(style.label_font_size());

    measurer.measure(&word, &definition).width()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use upset_core::draw::FixedWidthMeasurer;

    use super::*;

    fn plan(data: &[IntersectionRecord], solo_sets: &[SoloSet]) -> PlotLayout {
        PlotLayout::plan(
            data,
            solo_sets,
            &LayoutConfig::default(),
            &StyleConfig::default(),
            &FixedWidthMeasurer::new(0.5),
        )
    }

    fn sample() -> (Vec<IntersectionRecord>, Vec<SoloSet>) {
        (
            vec![
                IntersectionRecord::new("AB", 2),
                IntersectionRecord::new("A", 3),
            ],
            vec![SoloSet::new("A", 5), SoloSet::new("B", 3)],
        )
    }

    #[test]
    fn test_canvas_dimensions() {
        let (data, sets) = sample();
        let layout = plan(&data, &sets);

        assert_approx_eq!(f32, layout.width(), 80.0);
        assert_approx_eq!(f32, layout.height(), 400.0);
        assert_approx_eq!(f32, layout.svg_size().width(), 230.0);
        assert_approx_eq!(f32, layout.svg_size().height(), 780.0);
        assert_eq!(layout.root_transform(), "translate(150,20)scale(0.75)");
    }

    #[test]
    fn test_text_width_uses_one_char_less_than_longest_name() {
        let sets = vec![SoloSet::new("Reads", 1), SoloSet::new("Ab", 1)];
        let layout = plan(&[], &sets);
        // "AAAA" at 15px, 0.5em per glyph
        assert_approx_eq!(f32, layout.text_width(), 30.0);
        assert_approx_eq!(f32, layout.set_labels_origin().x(), -60.0);
        assert_approx_eq!(f32, layout.set_labels_origin().y(), 440.0);
    }

    #[test]
    fn test_single_char_names_have_no_text_width() {
        let (data, sets) = sample();
        let layout = plan(&data, &sets);
        assert_approx_eq!(f32, layout.text_width(), 0.0);
        assert_approx_eq!(f32, layout.set_bars_origin().x(), -180.0);
    }

    #[test]
    fn test_intersection_bars() {
        let (data, sets) = sample();
        let layout = plan(&data, &sets);

        let (origin, size) = layout.intersection_bar(0, 3);
        assert_approx_eq!(f32, origin.x(), 9.0);
        assert_approx_eq!(f32, origin.y(), 0.0);
        assert_approx_eq!(f32, size.height(), 400.0);
        assert_approx_eq!(f32, size.width(), 20.0);

        let (origin, size) = layout.intersection_bar(1, 2);
        assert_approx_eq!(f32, origin.x(), 44.1, epsilon = 0.0001);
        assert_approx_eq!(f32, size.height(), 266.66666, epsilon = 0.001);
    }

    #[test]
    fn test_set_bars() {
        let (data, sets) = sample();
        let layout = plan(&data, &sets);

        let (origin, size) = layout.set_bar(0, 5);
        assert_approx_eq!(f32, size.width(), 150.0);
        assert_approx_eq!(f32, size.height(), 13.0);
        assert_approx_eq!(f32, origin.x(), -10.0);
        assert_approx_eq!(f32, origin.y(), -6.5);

        let (origin, size) = layout.set_bar(1, 3);
        assert_approx_eq!(f32, size.width(), 90.0);
        assert_approx_eq!(f32, origin.x(), 50.0);
        assert_approx_eq!(f32, origin.y(), 28.6, epsilon = 0.0001);
    }

    #[test]
    fn test_set_panel_positions() {
        let (data, sets) = sample();
        let layout = plan(&data, &sets);

        let axis = layout.set_axis_origin();
        assert_approx_eq!(f32, axis.x(), -10.0);
        assert_approx_eq!(f32, axis.y(), 57.2, epsilon = 0.0001);

        let caption = layout.set_caption_position();
        assert_approx_eq!(f32, caption.x(), 75.0);
        assert_approx_eq!(f32, caption.y(), 96.2, epsilon = 0.0001);

        assert_approx_eq!(f32, layout.set_label_y(1), 40.1, epsilon = 0.0001);
    }

    #[test]
    fn test_matrix_positions() {
        let (data, sets) = sample();
        let layout = plan(&data, &sets);

        assert_eq!(layout.matrix_origin(), Point::new(20.0, 440.0));
        assert_eq!(layout.matrix_cell(0, 0), Point::new(0.0, 0.0));
        assert_eq!(layout.matrix_cell(1, 2), Point::new(35.1, 70.2));
    }

    #[test]
    fn test_zero_counts_use_degenerate_scales() {
        let data = vec![IntersectionRecord::new("A", 0)];
        let sets = vec![SoloSet::new("A", 0)];
        let layout = plan(&data, &sets);

        // Degenerate domains map onto the middle of the range
        let (_, size) = layout.set_bar(0, 0);
        assert_approx_eq!(f32, size.width(), 75.0);
        let (origin, _) = layout.intersection_bar(0, 0);
        assert_approx_eq!(f32, origin.y(), 200.0);
    }

    #[test]
    fn test_plot_orders_rows_by_count() {
        let (data, sets) = sample();
        let plot = Plot::new(
            &data,
            &sets,
            &LayoutConfig::default(),
            &StyleConfig::default(),
            &FixedWidthMeasurer::default(),
        );
        let order: Vec<&str> = plot.rows().iter().map(|row| row.set_name()).collect();
        assert_eq!(order, vec!["A", "AB"]);
        assert_eq!(plot.solo_sets().len(), 2);
        assert_eq!(plot.layout().intersection_count(), 2);
        // Input order is untouched
        assert_eq!(data[0].set_name(), "AB");
    }

    #[test]
    fn test_plan_is_deterministic() {
        let (data, sets) = sample();
        let first = plan(&data, &sets);
        let second = plan(&data, &sets);
        assert_eq!(first.svg_size(), second.svg_size());
        assert_eq!(first.set_bars_origin(), second.set_bars_origin());
        assert_eq!(first.intersection_scale(), second.intersection_scale());
    }
}
