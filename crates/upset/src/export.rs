//! Export functionality for UpSet plots.
//!
//! This module provides the [`Exporter`] trait that turns a planned
//! [`Plot`] into an output document. It is the final stage of rendering.
//!
//! # Pipeline Position
//!
//! ```text
//! Intersection and solo-set records
//!     ↓ validate
//! Checked input
//!     ↓ layout (sort + plan)
//! Plot
//!     ↓ export (this module)
//! SVG document or HTML mount fragment
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - standalone SVG via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`html`] - the SVG wrapped in a mount point with tooltip overlays
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`UpsetError::Export`] at the crate
//! boundary.
//!
//! [`UpsetError::Export`]: crate::UpsetError::Export

/// HTML export backend.
pub mod html;
/// SVG export backend.
pub mod svg;

use std::io::Write;

use crate::layout::Plot;

/// Abstraction for plot export backends.
pub trait Exporter {
    /// Writes `plot` to `writer` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the plot cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_plot(&self, plot: &Plot<'_>, writer: &mut dyn Write) -> Result<(), Error>;

    /// Renders `plot` to a string.
    ///
    /// # Errors
    ///
    /// Same as [`Exporter::export_plot`]; output that is not valid UTF-8 is
    /// reported as [`Error::Render`].
    fn export_to_string(&self, plot: &Plot<'_>) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.export_plot(plot, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| Error::Render(err.to_string()))
    }
}

/// Errors that can occur during plot export.
///
/// This type is converted into [`UpsetError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`UpsetError::Export`]: crate::UpsetError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
