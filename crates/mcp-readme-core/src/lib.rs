//! Core types, parameter extraction, and errors for mcp-readme.
//!
//! This crate provides the data model shared by the generator and the CLI:
//!
//! - Tool descriptors ([`ToolSchema`], [`ToolType`]) and their ordered
//!   grouping into documentation categories ([`ToolCatalog`])
//! - Flattening of JSON Schema inputs into [`Parameter`] values
//! - The [`GeneratorId`] embedded in README markers
//! - The error hierarchy and process [`cli::ExitCode`]s

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;
mod error;
mod parameter;
mod tool;
mod types;

pub mod cli;

pub use catalog::{Category, ToolCatalog};
pub use error::{Error, Result};
pub use parameter::{Parameter, extract_parameters};
pub use tool::{ToolSchema, ToolType};
pub use types::{GeneratorId, ToolName};
