//! mcp-readme CLI library.
//!
//! Exposes argument parsing, configuration, and the runner so they can be
//! tested without spawning the binary.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::Cli;
pub use config::{Config, OptionsConfig};
