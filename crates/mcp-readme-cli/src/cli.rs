//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Regenerate the tool tables and CLI options sections of an MCP server README.
///
/// Replaces the content between the `Tools generated by` and
/// `Options generated by` marker comments; everything else in the README is
/// left as is.
#[derive(Parser, Debug)]
#[command(name = "mcp-readme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./mcp-readme.toml when present)
    #[arg(short, long, env = "MCP_README_CONFIG")]
    pub config: Option<PathBuf>,

    /// README to update, overriding the configuration
    #[arg(long)]
    pub readme: Option<PathBuf>,

    /// Tool catalog JSON file, overriding the configuration
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Generator identifier used in markers, overriding the configuration
    #[arg(long)]
    pub generator: Option<String>,

    /// Fail if the README is out of date instead of writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the regenerated README instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Only regenerate the tools section
    #[arg(long)]
    pub skip_options: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}
