//! Configuration types for UpSet plot rendering.
//!
//! This module provides configuration structures that control how plots
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources; every field is optional and falls
//! back to the default plot geometry and palette.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas dimensions, margins and mark sizes.
//! - [`StyleConfig`] - Colors and font settings.
//!
//! # Example
//!
//! ```
//! # use upset::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().radius(), 13.0);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::{Deserialize, Deserializer};

use upset_core::{color::Color, geometry::Insets};

use crate::UpsetError;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry of the plot.
///
/// | Key | Default | Meaning |
/// |-----|---------|---------|
/// | `column_width` | `40` | Canvas width per intersection |
/// | `height` | `400` | Height of the intersection bar area |
/// | `margin` | `{top 20, right 0, bottom 300, left 150}` | Space around the plot area |
/// | `row_height` | `30` | Extra canvas height per base set |
/// | `radius` | `13` | Matrix circle radius; also sets row and column pitch |
/// | `pitch_factor` | `2.7` | Pitch as a multiple of `radius` |
/// | `canvas_scale` | `0.75` | Uniform scale of the plot contents |
/// | `set_bar_length` | `150` | Length of the longest set-size bar |
/// | `bar_width` | `20` | Width of intersection bars |
/// | `connector_width` | `4` | Stroke width of matrix connectors |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    column_width: f32,
    height: f32,
    #[serde(deserialize_with = "deserialize_margin")]
    margin: Insets,
    row_height: f32,
    radius: f32,
    pitch_factor: f64,
    canvas_scale: f32,
    set_bar_length: f32,
    bar_width: f32,
    connector_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 40.0,
            height: 400.0,
            margin: Insets::new(20.0, 0.0, 300.0, 150.0),
            row_height: 30.0,
            radius: 13.0,
            pitch_factor: 2.7,
            canvas_scale: 0.75,
            set_bar_length: 150.0,
            bar_width: 20.0,
            connector_width: 4.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the canvas width allotted to each intersection.
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    /// Returns the height of the intersection bar area.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the margins around the plot area.
    pub fn margin(&self) -> Insets {
        self.margin
    }

    /// Returns the extra canvas height added per base set.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Returns the matrix circle radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the distance between neighboring matrix rows and columns.
    pub fn pitch(&self) -> f32 {
        self.grid_offset(1)
    }

    /// Returns the offset of matrix row or column `index` from the first one.
    ///
    /// Computed in double precision so that offsets such as `2 × 35.1` come
    /// out as `70.2` rather than accumulating single-precision error.
    pub fn grid_offset(&self, index: usize) -> f32 {
        (index as f64 * f64::from(self.radius) * self.pitch_factor) as f32
    }

    /// Returns the uniform scale applied to the plot contents.
    pub fn canvas_scale(&self) -> f32 {
        self.canvas_scale
    }

    /// Returns the length of the longest set-size bar.
    pub fn set_bar_length(&self) -> f32 {
        self.set_bar_length
    }

    /// Returns the width of intersection bars.
    pub fn bar_width(&self) -> f32 {
        self.bar_width
    }

    /// Returns the stroke width of matrix connectors.
    pub fn connector_width(&self) -> f32 {
        self.connector_width
    }
}

/// Margin sides given in a config source; missing sides keep the default margin.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MarginOverrides {
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
}

fn deserialize_margin<'de, D>(deserializer: D) -> Result<Insets, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = MarginOverrides::deserialize(deserializer)?;
    let default = LayoutConfig::default().margin;

    Ok(Insets::new(
        overrides.top.unwrap_or(default.top()),
        overrides.right.unwrap_or(default.right()),
        overrides.bottom.unwrap_or(default.bottom()),
        overrides.left.unwrap_or(default.left()),
    ))
}

/// Visual styling configuration.
///
/// Colors are CSS color strings and are parsed when the palette is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    active_color: String,
    inactive_color: String,
    text_color: String,
    tooltip_text_color: String,
    background_color: Option<String>,
    font_family: String,
    label_font_size: u16,
    axis_font_size: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            active_color: "#02577b".to_string(),
            inactive_color: "silver".to_string(),
            text_color: "#3C4856".to_string(),
            tooltip_text_color: "white".to_string(),
            background_color: None,
            font_family: "sans-serif".to_string(),
            label_font_size: 15,
            axis_font_size: 14,
        }
    }
}

impl StyleConfig {
    /// Returns the font family for labels.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size of set labels and the intersection axis.
    pub fn label_font_size(&self) -> u16 {
        self.label_font_size
    }

    /// Returns the font size of the set-size axis, captions and tooltips.
    pub fn axis_font_size(&self) -> u16 {
        self.axis_font_size
    }

    /// Parses all configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`UpsetError::Config`] naming the first color that cannot be
    /// parsed.
    pub fn palette(&self) -> Result<Palette, UpsetError> {
        let parse = |field: &str, value: &str| {
            Color::new(value).map_err(|err| UpsetError::Config(format!("{field}: {err}")))
        };

        Ok(Palette {
            active: parse("active_color", &self.active_color)?,
            inactive: parse("inactive_color", &self.inactive_color)?,
            text: parse("text_color", &self.text_color)?,
            tooltip_text: parse("tooltip_text_color", &self.tooltip_text_color)?,
            background: self
                .background_color
                .as_deref()
                .map(|color| parse("background_color", color))
                .transpose()?,
        })
    }
}

/// Resolved plot colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Bars, participating matrix circles and connectors.
    pub active: Color,
    /// Matrix circles of sets not in an intersection.
    pub inactive: Color,
    /// Labels and axis tick text.
    pub text: Color,
    /// Tooltip foreground; the tooltip background uses `active`.
    pub tooltip_text: Color,
    /// Optional canvas background.
    pub background: Option<Color>,
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_approx_eq!(f32, layout.column_width(), 40.0);
        assert_approx_eq!(f32, layout.height(), 400.0);
        assert_approx_eq!(f32, layout.margin().left(), 150.0);
        assert_approx_eq!(f32, layout.margin().bottom(), 300.0);
        assert_approx_eq!(f32, layout.pitch(), 35.1);
        assert_approx_eq!(f32, layout.canvas_scale(), 0.75);
    }

    #[test]
    fn test_grid_offset() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.grid_offset(0), 0.0);
        assert_eq!(layout.grid_offset(2), 70.2);
        assert_eq!(layout.grid_offset(2).to_string(), "70.2");
    }

    #[test]
    fn test_layout_from_partial_toml_like_source() {
        let layout: LayoutConfig =
            serde_json::from_str(r#"{ "radius": 10, "margin": { "left": 200 } }"#).unwrap();
        assert_approx_eq!(f32, layout.radius(), 10.0);
        assert_approx_eq!(f32, layout.pitch(), 27.0);
        assert_approx_eq!(f32, layout.margin().left(), 200.0);
        assert_approx_eq!(f32, layout.margin().top(), 20.0);
        assert_approx_eq!(f32, layout.margin().right(), 0.0);
        assert_approx_eq!(f32, layout.margin().bottom(), 300.0);
        assert_approx_eq!(f32, layout.height(), 400.0);
    }

    #[test]
    fn test_margin_sides_override_independently() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "layout": { "margin": { "bottom": 120, "right": 8 } } }"#)
                .unwrap();
        let margin = config.layout().margin();
        assert_eq!(margin, Insets::new(20.0, 8.0, 120.0, 150.0));
    }

    #[test]
    fn test_unknown_margin_side_is_rejected() {
        let result: Result<LayoutConfig, _> =
            serde_json::from_str(r#"{ "margin": { "middle": 3 } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_palette_parses() {
        let palette = StyleConfig::default().palette().unwrap();
        assert_eq!(palette.inactive, Color::new("silver").unwrap());
        assert!(palette.background.is_none());
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let style = StyleConfig {
            active_color: "nope".to_string(),
            ..StyleConfig::default()
        };
        let err = style.palette().unwrap_err();
        assert!(matches!(err, UpsetError::Config(_)));
        assert!(err.to_string().contains("active_color"));
    }

    #[test]
    fn test_invalid_background_is_config_error() {
        let style = StyleConfig {
            background_color: Some("nope".to_string()),
            ..StyleConfig::default()
        };
        assert!(style.palette().is_err());
    }
}
