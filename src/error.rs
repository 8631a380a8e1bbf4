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

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// `Planning Center` API error with status context
    #[error("Planning Center API error: {message}")]
    PlanningCenter {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Expected remote data was missing (unknown field definition, empty collection)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Parsing error (response bodies, input files)
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// CSV reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a `Planning Center` error with HTTP status
    pub fn pco_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check PCO_APPLICATION_ID and PCO_SECRET environment variables"),
            403 => Some("Your API credentials may lack required permissions"),
            404 => Some("The requested resource was not found"),
            422 => Some("The request body was rejected by Planning Center validation"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Planning Center server error - try again later"),
            _ => None,
        };
        Self::PlanningCenter {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// HTTP status of a rejected API call, if this error carries one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::PlanningCenter { status, .. } => *status,
            _ => None,
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
