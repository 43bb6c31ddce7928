//! Command execution and logging initialization.

use anyhow::{Context, Result};
use mcp_readme_core::ToolCatalog;
use mcp_readme_core::cli::ExitCode;
use mcp_readme_gen::{ReadmeUpdater, UpdateMode, UpdateOutcome};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;

/// Initializes logging infrastructure.
///
/// Logs go to stderr so that `--stdout` output stays clean. `RUST_LOG`
/// controls the level unless `verbose` forces debug.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Maps a failed run to its exit code.
///
/// Configuration problems exit with [`ExitCode::INVALID_INPUT`], anything
/// else with [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<mcp_readme_core::Error>()
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}

/// Loads configuration, builds the updater, and runs it.
///
/// # Errors
///
/// Returns an error if configuration, catalog loading, or generation fails.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    config.apply_cli(&cli)?;
    config.validate()?;

    let catalog = load_catalog(&config.catalog).await?;

    let mode = if cli.check {
        UpdateMode::Check
    } else {
        UpdateMode::Write
    };
    let mut updater = ReadmeUpdater::new(&config.readme, catalog)
        .with_generator(config.generator.clone())
        .with_mode(mode);

    if cli.skip_options {
        info!("Skipping options section");
    } else {
        let options = config.options.as_ref().ok_or_else(|| mcp_readme_core::Error::ConfigError {
            message: "no [options] command configured; add one or pass --skip-options".to_string(),
        })?;
        updater = updater.with_options(options.help_source(), options.example());
    }

    if cli.stdout {
        let content = updater
            .render()
            .await
            .with_context(|| format!("failed to render {}", config.readme.display()))?;
        print!("{content}");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = updater
        .update()
        .await
        .with_context(|| format!("failed to update {}", config.readme.display()))?;

    match outcome {
        UpdateOutcome::Updated | UpdateOutcome::Unchanged => Ok(ExitCode::SUCCESS),
        UpdateOutcome::OutOfDate => {
            warn!("README is out of date; run mcp-readme without --check to regenerate it");
            Ok(ExitCode::ERROR)
        }
    }
}

/// Reads and parses the tool catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog.
pub async fn load_catalog(path: &Path) -> Result<ToolCatalog> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| mcp_readme_core::Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let catalog = ToolCatalog::from_json_str(&content)
        .with_context(|| format!("failed to load tool catalog {}", path.display()))?;
    Ok(catalog)
}
