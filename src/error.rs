//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Report generation error
    #[error("Report generation failed: {message}")]
    Report {
        /// Human-readable error description.
        message: String,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Report export error
    #[error("Export failed for {path:?}: {message}")]
    Export {
        /// Destination the export was writing to.
        path: std::path::PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    #[allow(dead_code)]
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a report generation error without a hint
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report { message: message.into(), hint: None }
    }

    /// Create a report generation error with an actionable hint
    pub fn report_hint(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Report { message: message.into(), hint: Some(hint) }
    }

    /// Create an export error with destination context
    pub fn export(path: impl Into<std::path::PathBuf>, message: impl Into<String>) -> Self {
        Self::Export { path: path.into(), message: message.into() }
    }

    /// Create a config error with actionable hint
    #[allow(dead_code)]
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn report_hint_is_carried() {
        let err = Error::report_hint("empty product name", "Type a product name before generating");
        match err {
            Error::Report { hint: Some(h), .. } => {
                assert!(h.contains("product name"));
            }
            _ => panic!("Expected Report error with hint"),
        }
    }

    #[test]
    fn export_error_keeps_path() {
        let err = Error::export("/tmp/report.json", "disk full");
        let rendered = err.to_string();
        assert!(rendered.contains("report.json"));
        assert!(rendered.contains("disk full"));
    }
}
