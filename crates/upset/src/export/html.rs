//! HTML mount-point export.
//!
//! Produces a fragment that can be inserted into a page:
//!
//! ```html
//! <div id="plot" style="position: relative">
//!   <svg class="plot">...</svg>
//!   <div id="plot-set-tooltip" ...></div>
//!   <div id="plot-intersection-tooltip" ...></div>
//!   <script>...</script>
//! </div>
//! ```
//!
//! Every bar carries its tooltip text in `data-tooltip` and the id of its
//! overlay in `data-tooltip-target`. The inline script shows the overlay on
//! hover, keeps it at a fixed offset from the pointer and hides it again when
//! the pointer leaves.

use std::io::Write;

use htmlize::{escape_attribute, escape_text};
use log::info;

use crate::{
    export::{self, Exporter, svg::Svg},
    layout::Plot,
    tooltip::{self, Tooltip, TooltipKind},
};

/// Hover behavior shared by all overlays of a mount point.
const TOOLTIP_SCRIPT: &str = include_str!("html/tooltip.js");

/// HTML exporter.
#[derive(Debug, Clone)]
pub struct Html {
    svg: Svg,
    font_size: u16,
}

impl Html {
    /// Wraps `svg` in a mount point; overlays use `font_size` pixels.
    pub fn new(svg: Svg, font_size: u16) -> Self {
        Self { svg, font_size }
    }

    /// Renders the overlay `<div>` of `tooltip`.
    ///
    /// Exported plots render hidden overlays and leave hover handling to the
    /// inline script. A visible tooltip is rendered with its text at its
    /// current position, as the script would show it.
    pub fn render_overlay(&self, tooltip: &Tooltip) -> String {
        let kind = tooltip.kind();
        let offset = kind.offset();

        let mut style = tooltip::overlay_style(self.svg.palette(), self.font_size);
        if tooltip.is_visible() {
            let position = tooltip.position();
            style = style.replace("visibility: hidden", "visibility: visible");
            style.push_str(&format!(
                "; left: {}px; top: {}px",
                position.x(),
                position.y()
            ));
        }

        format!(
            r#"<div id="{id}" class="upset-tooltip" data-offset-left="{left}" data-offset-top="{top}" style="{style}">{text}</div>"#,
            id = escape_attribute(&kind.element_id(self.svg.mount_id())),
            left = offset.x(),
            top = offset.y(),
            style = escape_attribute(&style),
            text = escape_text(tooltip.text().unwrap_or_default()),
        )
    }
}

impl Exporter for Html {
    fn export_plot(&self, plot: &Plot<'_>, writer: &mut dyn Write) -> Result<(), export::Error> {
        let mount_id = self.svg.mount_id();
        info!(mount_id; "Exporting HTML mount point");

        let set_tooltip = Tooltip::new(TooltipKind::SetSize);
        let intersection_tooltip = Tooltip::new(TooltipKind::Intersection);

        writeln!(
            writer,
            r#"<div id="{}" style="position: relative">"#,
            escape_attribute(mount_id)
        )?;
        writeln!(writer, "{}", self.svg.render_document(plot))?;
        writeln!(writer, "{}", self.render_overlay(&set_tooltip))?;
        writeln!(writer, "{}", self.render_overlay(&intersection_tooltip))?;
        writeln!(writer, "<script>\n{TOOLTIP_SCRIPT}</script>")?;
        writeln!(writer, "</div>")?;
        Ok(())
    }
}
