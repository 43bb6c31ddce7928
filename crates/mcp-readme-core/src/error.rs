//! Error types for README generation.
//!
//! Every failure is fatal to a generation run: the README is written once, at
//! the very end, so any error returned from this hierarchy means the file on
//! disk was left untouched.
//!
//! # Examples
//!
//! ```
//! use mcp_readme_core::{Error, Result};
//!
//! fn require_generator(id: &str) -> Result<()> {
//!     if id.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "generator id cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_generator("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for README generation.
#[derive(Error, Debug)]
pub enum Error {
    /// A start or end marker is missing from the document.
    #[error("Markers for generated section not found in README: '{start}' ... '{end}'")]
    MarkersNotFound {
        /// Start marker of the region
        start: String,
        /// End marker of the region
        end: String,
    },

    /// A marker occurs more than once, so the region is ambiguous.
    #[error("Marker '{marker}' appears {count} times in README, expected exactly once")]
    DuplicateMarker {
        /// The repeated marker
        marker: String,
        /// Number of occurrences found
        count: usize,
    },

    /// The end marker does not follow the start marker.
    #[error("End marker '{end}' must come after start marker '{start}'")]
    MarkersOutOfOrder {
        /// Start marker of the region
        start: String,
        /// End marker of the region
        end: String,
    },

    /// Help output lacks one of the lines that bound the options list.
    #[error("No line containing '{marker}' found in help output")]
    HelpMarkerNotFound {
        /// The marker token that was looked for
        marker: String,
    },

    /// The help subprocess could not be spawned or exited unsuccessfully.
    #[error("Command '{command}' failed: {message}")]
    Subprocess {
        /// Command line that was run
        command: String,
        /// Description of the failure
        message: String,
        /// Underlying spawn error, if any
        #[source]
        source: Option<std::io::Error>,
    },

    /// Operation exceeded its configured timeout.
    #[error("Operation timed out after {duration_secs}s: {operation}")]
    Timeout {
        /// Name of the operation that timed out
        operation: String,
        /// Duration in seconds before timeout occurred
        duration_secs: u64,
    },

    /// Reading or writing a file failed.
    #[error("File I/O error for {path:?}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Tool catalog is structurally invalid.
    #[error("Invalid tool catalog: {message}")]
    CatalogError {
        /// Description of the problem
        message: String,
    },

    /// JSON conversion failed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if a README marker is missing, repeated, or misordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_readme_core::Error;
    ///
    /// let err = Error::MarkersNotFound {
    ///     start: "<!-- a -->".to_string(),
    ///     end: "<!-- b -->".to_string(),
    /// };
    /// assert!(err.is_marker_error());
    /// ```
    #[must_use]
    pub const fn is_marker_error(&self) -> bool {
        matches!(
            self,
            Self::MarkersNotFound { .. }
                | Self::DuplicateMarker { .. }
                | Self::MarkersOutOfOrder { .. }
        )
    }

    /// Returns `true` if help output could not be trimmed.
    #[must_use]
    pub const fn is_help_marker_error(&self) -> bool {
        matches!(self, Self::HelpMarkerNotFound { .. })
    }

    /// Returns `true` if the help subprocess failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_readme_core::Error;
    ///
    /// let err = Error::Subprocess {
    ///     command: "node cli.js --help".to_string(),
    ///     message: "exit status: 1".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_subprocess_error());
    /// ```
    #[must_use]
    pub const fn is_subprocess_error(&self) -> bool {
        matches!(self, Self::Subprocess { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if this is a file I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the tool catalog could not be loaded.
    #[must_use]
    pub const fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::CatalogError { .. } | Self::SerializationError { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for README generation.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_errors_classified() {
        let not_found = Error::MarkersNotFound {
            start: "a".into(),
            end: "b".into(),
        };
        let duplicate = Error::DuplicateMarker {
            marker: "a".into(),
            count: 2,
        };
        let order = Error::MarkersOutOfOrder {
            start: "a".into(),
            end: "b".into(),
        };

        assert!(not_found.is_marker_error());
        assert!(duplicate.is_marker_error());
        assert!(order.is_marker_error());
        assert!(!not_found.is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::HelpMarkerNotFound {
            marker: "--version".into(),
        };
        assert_eq!(
            err.to_string(),
            "No line containing '--version' found in help output"
        );

        let err = Error::Timeout {
            operation: "node cli.js --help".into(),
            duration_secs: 30,
        };
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "Operation timed out after 30s: node cli.js --help"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::Io {
            path: PathBuf::from("README.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_io_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_catalog_errors_classified() {
        let err = Error::SerializationError {
            message: "bad json".into(),
            source: None,
        };
        assert!(err.is_catalog_error());
        assert!(
            Error::CatalogError {
                message: "empty".into()
            }
            .is_catalog_error()
        );
    }
}
