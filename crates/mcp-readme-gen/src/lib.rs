//! README generation for MCP tool servers.
//!
//! Regenerates two marker-delimited regions of a README:
//!
//! - **Tools**: collapsible per-category tables of tool descriptors, rendered
//!   by [`render_tools`]
//! - **Options**: the CLI's `--help` output trimmed to its options list and
//!   fenced, rendered by [`render_options`]
//!
//! Both go through [`replace_between`], which swaps the text between a
//! [`MarkerPair`] and leaves the rest of the document untouched.
//! [`ReadmeUpdater`] runs the whole pipeline.
//!
//! # Examples
//!
//! ```
//! use mcp_readme_core::{GeneratorId, ToolCatalog, ToolSchema, ToolType};
//! use mcp_readme_gen::{MarkerPair, render_tools, replace_between};
//!
//! let generator = GeneratorId::default();
//! let catalog = ToolCatalog::new().category(
//!     "Tabs",
//!     vec![ToolSchema::new("browser_tab_list", "List tabs", "List browser tabs", ToolType::ReadOnly)],
//! );
//!
//! let readme = "# Tools\n<!--- Tools generated by mcp-readme -->\n<!--- End of tools generated section -->\n";
//! let updated = replace_between(readme, &MarkerPair::tools(&generator), &render_tools(&catalog, &generator))?;
//!
//! assert!(updated.contains("- **browser_tab_list**"));
//! # Ok::<(), mcp_readme_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::format_push_string)]

pub mod options;
pub mod splice;
pub mod tools;
pub mod updater;

pub use options::{CommandHelpSource, HelpSource, render_options, trim_help};
pub use splice::{MarkerPair, replace_between};
pub use tools::{format_parameter, format_tool, render_tools};
pub use updater::{ReadmeUpdater, UpdateMode, UpdateOutcome};
