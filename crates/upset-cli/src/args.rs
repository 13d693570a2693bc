//! Command-line argument definitions for the UpSet CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output document kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document
    #[default]
    Svg,
    /// HTML fragment with hover tooltips
    Html,
}

impl OutputFormat {
    /// Returns the file extension of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
        }
    }
}

/// Command-line arguments for the UpSet plot tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON file
    #[arg(help = "Path to the input JSON file")]
    pub input: String,

    /// Path to the output file [default: out.svg or out.html]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Id of the HTML mount point
    #[arg(long, default_value = "plot")]
    pub mount_id: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the output path, defaulting to `out.<extension>`.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("out.{}", self.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["upset", "data.json"]);
        assert_eq!(args.input, "data.json");
        assert_eq!(args.format, OutputFormat::Svg);
        assert_eq!(args.mount_id, "plot");
        assert_eq!(args.log_level, "info");
        assert_eq!(args.output_path(), "out.svg");
    }

    #[test]
    fn test_html_output_default_name() {
        let args = Args::parse_from(["upset", "data.json", "--format", "html"]);
        assert_eq!(args.format, OutputFormat::Html);
        assert_eq!(args.output_path(), "out.html");
    }

    #[test]
    fn test_explicit_output_wins() {
        let args = Args::parse_from(["upset", "data.json", "-f", "html", "-o", "plot.htm"]);
        assert_eq!(args.output_path(), "plot.htm");
    }
}
