//! UpSet - render UpSet plots of set-intersection cardinalities.
//!
//! An UpSet plot shows how many elements each combination of base sets has
//! in common. It has three parts: vertical bars for the intersection sizes
//! (largest first), a matrix of circles marking which sets take part in each
//! intersection, and horizontal bars for the size of each base set.
//!
//! Plots are rendered either as a standalone SVG document or as an HTML
//! mount point that adds hover tooltips to the bars.

pub mod config;
pub mod model;
pub mod tooltip;

mod error;
mod export;
mod layout;

pub use upset_core::{color, draw, geometry, scale};

pub use error::UpsetError;
pub use model::{IntersectionRecord, SoloSet, UpsetData};

use log::{debug, info};

use upset_core::draw::{FontMeasurer, TextMeasurer};

use config::AppConfig;
use export::{Exporter, html::Html, svg::SvgBuilder};
use layout::Plot;

/// Mount point id that standalone SVG tooltips refer to.
pub use export::svg::DEFAULT_MOUNT_ID;

/// Builder for rendering UpSet plots.
///
/// # Examples
///
/// ```rust
/// use upset::{IntersectionRecord, PlotBuilder, SoloSet, config::AppConfig};
///
/// let solo_sets = vec![SoloSet::new("Set1", 5), SoloSet::new("Set2", 3)];
/// let data = vec![
///     IntersectionRecord::new("AB", 2),
///     IntersectionRecord::new("A", 3),
/// ];
///
/// let builder = PlotBuilder::new(AppConfig::default());
/// let svg = builder
///     .render_svg(&data, &solo_sets)
///     .expect("Failed to render")
///     .expect("Plot has sets");
/// assert!(svg.contains("upsetCircles"));
///
/// // Without base sets there is nothing to draw
/// assert!(builder.render_svg(&data, &[]).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct PlotBuilder {
    config: AppConfig,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for PlotBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl PlotBuilder {
    /// Create a new plot builder with the given configuration.
    ///
    /// Label widths are measured with system fonts through [`FontMeasurer`].
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            measurer: Box::new(FontMeasurer::new()),
        }
    }

    /// Replaces the text measurer used to size set labels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upset::{PlotBuilder, draw::FixedWidthMeasurer};
    ///
    /// let builder = PlotBuilder::default().with_measurer(FixedWidthMeasurer::default());
    /// ```
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render a plot to a standalone SVG string.
    ///
    /// Each bar carries its tooltip text as an SVG `<title>`. Returns
    /// `Ok(None)` without rendering when `solo_sets` is empty. The input
    /// slices are not modified.
    ///
    /// # Errors
    ///
    /// Returns [`UpsetError::InvalidInput`] for records that reference unknown
    /// sets or more than 26 base sets, [`UpsetError::Config`] for invalid
    /// style colors and [`UpsetError::Export`] if rendering fails.
    pub fn render_svg(
        &self,
        data: &[IntersectionRecord],
        solo_sets: &[SoloSet],
    ) -> Result<Option<String>, UpsetError> {
        let Some(plot) = self.plan(data, solo_sets)? else {
            return Ok(None);
        };

        let svg = SvgBuilder::new().with_style(self.config.style()).build()?;
        let rendered = svg.export_to_string(&plot)?;

        info!(bytes = rendered.len(); "SVG rendered successfully");
        Ok(Some(rendered))
    }

    /// Render a plot to an HTML fragment mounted at `mount_id`.
    ///
    /// The fragment is a `<div id="{mount_id}">` holding the SVG, the two
    /// tooltip overlays and the script that drives them. Returns `Ok(None)`
    /// without rendering when `solo_sets` is empty.
    ///
    /// # Errors
    ///
    /// Same as [`PlotBuilder::render_svg`].
    pub fn render_html(
        &self,
        data: &[IntersectionRecord],
        solo_sets: &[SoloSet],
        mount_id: &str,
    ) -> Result<Option<String>, UpsetError> {
        let Some(plot) = self.plan(data, solo_sets)? else {
            return Ok(None);
        };

        let style = self.config.style();
        let svg = SvgBuilder::new()
            .with_style(style)
            .with_mount_id(mount_id)
            .build()?;
        let html = Html::new(svg, style.axis_font_size());
        let rendered = html.export_to_string(&plot)?;

        info!(mount_id, bytes = rendered.len(); "HTML rendered successfully");
        Ok(Some(rendered))
    }

    /// Validates the input and plans the plot, or returns `None` for an empty plot.
    fn plan<'a>(
        &self,
        data: &'a [IntersectionRecord],
        solo_sets: &'a [SoloSet],
    ) -> Result<Option<Plot<'a>>, UpsetError> {
        if solo_sets.is_empty() {
            info!("No base sets given, nothing to render");
            return Ok(None);
        }

        model::validate(data, solo_sets)?;
        debug!(intersections = data.len(), sets = solo_sets.len(); "Input validated");

        Ok(Some(Plot::new(
            data,
            solo_sets,
            self.config.layout(),
            self.config.style(),
            self.measurer.as_ref(),
        )))
    }
}

/// Renders an HTML plot mounted at `mount_id` with the default configuration.
///
/// Shorthand for [`PlotBuilder::default`] followed by
/// [`PlotBuilder::render_html`].
///
/// # Errors
///
/// Same as [`PlotBuilder::render_svg`].
pub fn plot_upset(
    data: &[IntersectionRecord],
    solo_sets: &[SoloSet],
    mount_id: &str,
) -> Result<Option<String>, UpsetError> {
    PlotBuilder::default().render_html(data, solo_sets, mount_id)
}
