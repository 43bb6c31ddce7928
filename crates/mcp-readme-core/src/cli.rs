//! Process exit codes.
//!
//! The library never terminates the process; the binary maps outcomes and
//! errors to an [`ExitCode`] and exits with it.
//!
//! # Examples
//!
//! ```
//! use mcp_readme_core::cli::ExitCode;
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! assert!(code.is_success());
//! ```

use crate::Error;
use std::fmt;

/// CLI exit code with semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// Generation failed, or `--check` found the README out of date (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid configuration or arguments (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Picks the exit code for a failed run.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_readme_core::{Error, cli::ExitCode};
    ///
    /// let err = Error::ConfigError { message: "bad".to_string() };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    ///
    /// let err = Error::HelpMarkerNotFound { marker: "--help".to_string() };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::ERROR);
    /// ```
    #[must_use]
    pub const fn for_error(error: &Error) -> Self {
        if error.is_config_error() {
            Self::INVALID_INPUT
        } else {
            Self::ERROR
        }
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
