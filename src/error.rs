//! Centralized error handling for the podcast dashboard.
//!
//! Two layers of errors live here:
//!
//! - [`LoadError`] is the narrow error of the table loader. It is fatal at
//!   startup: no query can run without a loaded table.
//! - [`DashboardError`] is the crate-wide error used by export, configuration
//!   and the shell. Every lower-level error converts into it through `From`,
//!   so the `?` operator works across module boundaries:
//!
//! ```no_run
//! use podcast_dashboard::error::Result;
//!
//! fn read_settings(path: &str) -> Result<String> {
//!     // std::io::Error converts into DashboardError automatically
//!     let content = std::fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! Unknown categories are not part of this taxonomy: a category
//! that matches no record yields an empty view, never an error.

use std::fmt;

/// Failure to produce the in-memory podcast table.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be fetched or opened.
    Unreachable { source: String, reason: String },

    /// The header does not describe the expected 7-column layout.
    Schema { expected: usize, found: usize },

    /// The body could not be parsed consistently with the header.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { source, reason } => {
                write!(f, "source '{source}' is unreachable: {reason}")
            }
            Self::Schema { expected, found } => {
                write!(f, "expected {expected} columns, found {found}")
            }
            Self::Parse(msg) => write!(f, "malformed dataset: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<polars::error::PolarsError> for LoadError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Main error type for dashboard operations.
#[derive(Debug)]
pub enum DashboardError {
    /// I/O errors (file operations, dialogs, etc.)
    Io(std::io::Error),

    /// The dataset could not be loaded
    Load(LoadError),

    /// Data processing errors (Polars frames, casts)
    DataProcessing(String),

    /// A view could not be written to disk
    Export(String),

    /// Configuration errors
    Config(String),

    /// File not found or unusable path
    InvalidPath(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Export(msg) => write!(f, "Export error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<LoadError> for DashboardError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for DashboardError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DashboardError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: DashboardError = e.into();
            DashboardError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: DashboardError = e.into();
            DashboardError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::Schema {
            expected: 7,
            found: 5,
        };
        assert_eq!(err.to_string(), "expected 7 columns, found 5");

        let err = LoadError::Unreachable {
            source: "missing.csv".to_owned(),
            reason: "not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "source 'missing.csv' is unreachable: not found"
        );
    }

    #[test]
    fn test_load_error_wraps_into_dashboard_error() {
        let err: DashboardError = LoadError::Parse("bad quote".to_owned()).into();
        assert_eq!(err.to_string(), "Load error: malformed dataset: bad quote");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_export_error_display() {
        let err = DashboardError::Export("disk full".to_owned());
        assert_eq!(err.to_string(), "Export error: disk full");
    }

    #[test]
    fn test_unequal_row_becomes_parse_error() {
        let mut reader = csv::ReaderBuilder::new().from_reader("a,b\n1\n".as_bytes());
        let err = reader
            .records()
            .find_map(std::result::Result::err)
            .map(LoadError::from);
        assert!(matches!(err, Some(LoadError::Parse(_))));
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file.txt",
        ));

        let result: Result<()> = result.context("Failed to read file");
        assert!(
            result
                .err()
                .is_some_and(|e| e.to_string().contains("Failed to read file"))
        );
    }
}
