//! Strong domain types for README generation.
//!
//! # Examples
//!
//! ```
//! use mcp_readme_core::{GeneratorId, ToolName};
//!
//! let tool = ToolName::new("browser_click");
//! assert_eq!(tool.as_str(), "browser_click");
//!
//! let generator = GeneratorId::default();
//! assert_eq!(generator.as_str(), "mcp-readme");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tool name identifier (newtype over String).
///
/// # Examples
///
/// ```
/// use mcp_readme_core::ToolName;
///
/// let name = ToolName::new("browser_navigate");
/// assert_eq!(name.to_string(), "browser_navigate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    /// Creates a new tool name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tool name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ToolName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of the generator, embedded in README markers and provenance notes.
///
/// The same identifier must be used for every run against a document, since
/// it is part of the start markers that delimit generated regions.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::GeneratorId;
///
/// let id = GeneratorId::new("update-readme.js").unwrap();
/// assert_eq!(id.as_str(), "update-readme.js");
///
/// assert!(GeneratorId::new("").is_err());
/// assert!(GeneratorId::new("bad -->").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GeneratorId(String);

impl GeneratorId {
    /// Identifier used when none is configured.
    pub const DEFAULT: &'static str = "mcp-readme";

    /// Creates a validated generator identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the identifier is blank, spans multiple
    /// lines, or contains `-->` (which would close the HTML comment early).
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "generator id cannot be empty".to_string(),
            });
        }
        if id.contains('\n') || id.contains('\r') {
            return Err(Error::ConfigError {
                message: format!("generator id must be a single line: {id:?}"),
            });
        }
        if id.contains("-->") {
            return Err(Error::ConfigError {
                message: format!("generator id cannot contain '-->': {id}"),
            });
        }

        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GeneratorId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GeneratorId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}
