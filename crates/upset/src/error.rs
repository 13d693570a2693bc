//! Error types for UpSet plot operations.
//!
//! This module provides the main error type [`UpsetError`] which wraps
//! the error conditions that can occur while loading and rendering plot data.

use std::io;

use thiserror::Error;

/// The main error type for UpSet plot operations.
///
/// Empty solo-set input is *not* an error: rendering it is a no-op.
#[derive(Debug, Error)]
pub enum UpsetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for UpsetError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl UpsetError {
    /// Create a new `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
