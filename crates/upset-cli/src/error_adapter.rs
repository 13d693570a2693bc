//! Error adapter for converting UpsetError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use upset::UpsetError;

/// Adapter giving an [`UpsetError`] a diagnostic code and, where one helps, a hint.
pub struct ErrorAdapter<'a>(pub &'a UpsetError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            UpsetError::Io(_) => "upset::io",
            UpsetError::InvalidInput(_) => "upset::input",
            UpsetError::Config(_) => "upset::config",
            UpsetError::Json(_) => "upset::json",
            UpsetError::Export(_) => "upset::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            UpsetError::InvalidInput(_) => {
                "each `setName` letter must name a solo set: `A` for the first, `B` for the second, up to `Z`"
            }
            UpsetError::Json(_) => {
                r#"expected `{ "data": [{ "setName": "AB", "num": 2 }], "soloSets": [{ "name": "A", "num": 5 }] }`"#
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Convert an [`UpsetError`] into a reportable diagnostic.
pub fn to_reportable(err: &UpsetError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &UpsetError) -> Option<String> {
        to_reportable(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes() {
        let io = UpsetError::Io(std::io::Error::other("disk"));
        assert_eq!(code(&io).as_deref(), Some("upset::io"));

        let input = UpsetError::invalid_input("bad letter");
        assert_eq!(code(&input).as_deref(), Some("upset::input"));

        let config = UpsetError::Config("bad color".to_string());
        assert_eq!(code(&config).as_deref(), Some("upset::config"));

        let json = upset::UpsetData::from_json("not json").unwrap_err();
        assert_eq!(code(&json).as_deref(), Some("upset::json"));
    }

    #[test]
    fn test_help_only_for_input_errors() {
        let input = UpsetError::invalid_input("bad letter");
        assert!(to_reportable(&input).help().is_some());

        let config = UpsetError::Config("bad color".to_string());
        assert!(to_reportable(&config).help().is_none());
    }

    #[test]
    fn test_display_passes_through() {
        let err = UpsetError::Config("bad color".to_string());
        assert_eq!(
            to_reportable(&err).to_string(),
            "Configuration error: bad color"
        );
    }
}
