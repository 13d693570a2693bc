//! SVG export.
//!
//! The document has one root group, translated by the plot margins and
//! scaled down, holding four panels:
//!
//! - `#setLabelsGroup` and `#barsGroup` - base-set names, size bars and axis ([`set_sizes`])
//! - `#upsetBars` - intersection bars with their axes ([`intersections`])
//! - `#upsetCircles` - the membership matrix ([`matrix`])

mod intersections;
mod matrix;
mod set_sizes;

use std::io::Write;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use upset_core::draw::{TextAnchor, TextDefinition};

use crate::{
    UpsetError,
    config::{Palette, StyleConfig},
    export,
    layout::Plot,
    tooltip::TooltipKind,
};

/// Mount point id used when none is given.
pub const DEFAULT_MOUNT_ID: &str = "plot";

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    mount_id: Option<&'a str>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the mount point the bars' tooltip targets are derived from.
    pub fn with_mount_id(mut self, mount_id: &'a str) -> Self {
        self.mount_id = Some(mount_id);
        self
    }

    /// Resolves the palette and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`UpsetError::Config`] if a style color cannot be parsed.
    pub fn build(self) -> Result<Svg, UpsetError> {
        let style = self.style.cloned().unwrap_or_default();
        let palette = style.palette()?;
        let mount_id = self.mount_id.unwrap_or(DEFAULT_MOUNT_ID).to_string();

        Ok(Svg {
            style,
            palette,
            mount_id,
        })
    }
}

/// SVG exporter.
#[derive(Debug, Clone)]
pub struct Svg {
    style: StyleConfig,
    palette: Palette,
    mount_id: String,
}

impl Svg {
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Renders the complete plot to an SVG document.
    pub fn render_document(&self, plot: &Plot<'_>) -> Document {
        let layout = plot.layout();
        let size = layout.svg_size();

        let mut doc = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .set("class", "plot");

        if let Some(background) = &self.palette.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background),
            );
        }

        let root = svg_element::Group::new()
            .set("transform", layout.root_transform())
            .set("fill", "white")
            .add(self.render_set_labels(plot))
            .add(self.render_set_bars(plot))
            .add(self.render_intersections(plot))
            .add(self.render_matrix(plot));

        debug!(
            width = size.width(),
            height = size.height();
            "SVG document rendered"
        );
        doc.add(root)
    }

    /// Returns the element id of the overlay that shows tooltips of `kind`.
    fn tooltip_target(&self, kind: TooltipKind) -> String {
        kind.element_id(&self.mount_id)
    }

    /// Text style in the label font and text color.
    fn text_definition(&self, font_size: u16, anchor: TextAnchor) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(self.style.font_family());
        definition.set_font_size(font_size);
        definition.set_color(Some(self.palette.text));
        definition.set_anchor(anchor);
        definition
    }
}

impl export::Exporter for Svg {
    fn export_plot(&self, plot: &Plot<'_>, writer: &mut dyn Write) -> Result<(), export::Error> {
        info!(intersections = plot.rows().len(); "Exporting SVG");
        let doc = self.render_document(plot);
        write!(writer, "{doc}")?;
        Ok(())
    }
}
