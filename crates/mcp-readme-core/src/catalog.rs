//! Ordered grouping of tools into documentation categories.
//!
//! Category order and tool order within a category are exactly the order of
//! construction; nothing is sorted. A tool may be listed in several
//! categories (e.g. once under its regular heading and again under a
//! vision-mode heading).
//!
//! # Catalog file format
//!
//! ```json
//! {
//!   "categories": [
//!     {
//!       "name": "Navigation",
//!       "tools": [
//!         {
//!           "name": "browser_navigate",
//!           "title": "Navigate to a URL",
//!           "description": "Navigate to a URL",
//!           "inputSchema": { "type": "object", "properties": { "url": { "type": "string" } }, "required": ["url"] },
//!           "type": "destructive"
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::{Error, Result, ToolSchema};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named, ordered group of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Heading shown in the README.
    pub name: String,
    /// Tools in display order.
    #[serde(default)]
    pub tools: Vec<ToolSchema>,
}

/// Ordered mapping from category label to tools.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::{ToolCatalog, ToolSchema, ToolType};
///
/// let close = ToolSchema::new("browser_close", "Close browser", "Close the page", ToolType::ReadOnly);
///
/// let catalog = ToolCatalog::new()
///     .category("Utilities", vec![close.clone()])
///     .category("Vision mode", vec![close]);
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.tool_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCatalog {
    categories: Vec<Category>,
}

impl ToolCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Appends a category, keeping insertion order.
    #[must_use]
    pub fn category(mut self, name: impl Into<String>, tools: Vec<ToolSchema>) -> Self {
        self.push(name, tools);
        self
    }

    /// Appends a category in place.
    pub fn push(&mut self, name: impl Into<String>, tools: Vec<ToolSchema>) {
        self.categories.push(Category {
            name: name.into(),
            tools,
        });
    }

    /// Parses a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if the JSON is malformed, or
    /// `Error::CatalogError` if a category is unnamed or repeated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).map_err(|e| Error::SerializationError {
            message: format!("failed to parse tool catalog: {e}"),
            source: Some(e),
        })?;

        catalog.validate()?;
        debug!(
            "Parsed tool catalog with {} categories and {} tools",
            catalog.len(),
            catalog.tool_count()
        );
        Ok(catalog)
    }

    /// Checks that every category has a distinct, non-blank name.
    ///
    /// # Errors
    ///
    /// Returns `Error::CatalogError` describing the first offending category.
    pub fn validate(&self) -> Result<()> {
        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(Error::CatalogError {
                    message: format!("category #{} has an empty name", index + 1),
                });
            }
            if self.categories[..index]
                .iter()
                .any(|earlier| earlier.name == category.name)
            {
                return Err(Error::CatalogError {
                    message: format!("category '{}' is listed more than once", category.name),
                });
            }
        }
        Ok(())
    }

    /// Iterates over categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if there are no categories.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of tool entries, counting repeats across categories.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ToolCatalog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
