//! mcp-readme: regenerate the generated sections of an MCP server README.
//!
//! # Examples
//!
//! ```bash
//! # Update README.md using ./mcp-readme.toml
//! mcp-readme
//!
//! # Fail in CI when the README is stale
//! mcp-readme --check
//!
//! # Tools only, printing the result
//! mcp-readme --skip-options --stdout
//! ```

use clap::Parser;
use mcp_readme_cli::Cli;
use mcp_readme_cli::runner::{exit_code_for, init_logging, run};
use mcp_readme_core::cli::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("{err:#}");
        std::process::exit(ExitCode::ERROR.as_i32());
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!("Error updating README: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}
