//! UpSet CLI library
//!
//! This module contains the core CLI logic for the UpSet plot tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::{info, warn};

use upset::{PlotBuilder, UpsetData, UpsetError};

/// Run the UpSet CLI application
///
/// Reads the JSON input, renders it in the requested format and writes the
/// result to the output file. When the input has no solo sets nothing is
/// rendered and no output file is written.
///
/// # Errors
///
/// Returns `UpsetError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON input
/// - Records referencing unknown sets
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), UpsetError> {
    let output = args.output_path();
    info!(
        input_path = args.input,
        output_path = output,
        format:? = args.format;
        "Processing plot"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let input = UpsetData::from_json(&source)?;

    let builder = PlotBuilder::new(app_config);
    let rendered = match args.format {
        OutputFormat::Svg => builder.render_svg(input.data(), input.solo_sets())?,
        OutputFormat::Html => {
            builder.render_html(input.data(), input.solo_sets(), &args.mount_id)?
        }
    };

    let Some(rendered) = rendered else {
        warn!(input_path = args.input; "Input has no solo sets, no output written");
        return Ok(());
    };

    fs::write(&output, rendered)?;

    info!(output_file = output; "Plot exported successfully");

    Ok(())
}
