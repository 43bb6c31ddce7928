//! README update pipeline.
//!
//! Reads the README, splices the tool tables and then the options block into
//! their regions, and writes the result back once at the end. Any error stops
//! the pipeline before the write, so the file on disk is never half-updated.

use crate::options::{HelpSource, render_options};
use crate::splice::{MarkerPair, replace_between};
use crate::tools::render_tools;
use mcp_readme_core::{Error, GeneratorId, Result, ToolCatalog};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to do with the regenerated README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Write the file when its content changed.
    #[default]
    Write,
    /// Compare only; never write.
    Check,
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The README was rewritten.
    Updated,
    /// The README already matched the generated content.
    Unchanged,
    /// Check mode found generated regions that differ.
    OutOfDate,
}

#[derive(Debug)]
struct OptionsPass {
    source: Box<dyn HelpSource>,
    example: String,
}

/// Regenerates the marked regions of a README.
///
/// # Examples
///
/// ```no_run
/// use mcp_readme_core::{GeneratorId, ToolCatalog};
/// use mcp_readme_gen::{CommandHelpSource, ReadmeUpdater, UpdateOutcome};
///
/// # async fn example() -> mcp_readme_core::Result<()> {
/// let updater = ReadmeUpdater::new("README.md", ToolCatalog::new())
///     .with_generator(GeneratorId::new("update-readme.js")?)
///     .with_options(
///         CommandHelpSource::new("node", ["cli.js", "--help"]),
///         "npx @playwright/mcp@latest --help",
///     );
///
/// let outcome = updater.update().await?;
/// assert_ne!(outcome, UpdateOutcome::OutOfDate);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReadmeUpdater {
    readme: PathBuf,
    catalog: ToolCatalog,
    generator: GeneratorId,
    options: Option<OptionsPass>,
    mode: UpdateMode,
}

impl ReadmeUpdater {
    /// Creates an updater for `readme` that renders only the tool tables.
    #[must_use]
    pub fn new(readme: impl Into<PathBuf>, catalog: ToolCatalog) -> Self {
        Self {
            readme: readme.into(),
            catalog,
            generator: GeneratorId::default(),
            options: None,
            mode: UpdateMode::default(),
        }
    }

    /// Sets the generator identifier used in markers and notes.
    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorId) -> Self {
        self.generator = generator;
        self
    }

    /// Enables the options pass.
    ///
    /// `example` is the invocation shown on the first line of the block.
    #[must_use]
    pub fn with_options(
        mut self,
        source: impl HelpSource + 'static,
        example: impl Into<String>,
    ) -> Self {
        self.options = Some(OptionsPass {
            source: Box::new(source),
            example: example.into(),
        });
        self
    }

    /// Sets the update mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: UpdateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Path of the README being updated.
    #[must_use]
    pub fn readme(&self) -> &Path {
        &self.readme
    }

    /// Applies both passes to `content` and returns the new document.
    ///
    /// # Errors
    ///
    /// Returns marker errors from either region and any options pass failure.
    pub async fn generate(&self, content: &str) -> Result<String> {
        info!("Loading tool information from catalog...");
        info!("Found {} tools", self.catalog.tool_count());

        let tool_lines = render_tools(&self.catalog, &self.generator);
        let with_tools = replace_between(content, &MarkerPair::tools(&self.generator), &tool_lines)?;

        let Some(options) = &self.options else {
            debug!("Options pass disabled");
            return Ok(with_tools);
        };

        info!("Listing options...");
        let option_lines = render_options(&*options.source, &options.example).await?;
        replace_between(
            &with_tools,
            &MarkerPair::options(&self.generator),
            &option_lines,
        )
    }

    /// Reads the README and returns the regenerated document without writing.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the README cannot be read, plus any error from
    /// [`ReadmeUpdater::generate`].
    pub async fn render(&self) -> Result<String> {
        let content = self.read().await?;
        self.generate(&content).await
    }

    /// Runs the full pipeline according to the configured [`UpdateMode`].
    ///
    /// # Errors
    ///
    /// Returns the first failure; the README is left untouched in that case.
    pub async fn update(&self) -> Result<UpdateOutcome> {
        let original = self.read().await?;
        let updated = self.generate(&original).await?;

        if updated == original {
            info!("README is up to date");
            return Ok(UpdateOutcome::Unchanged);
        }

        match self.mode {
            UpdateMode::Check => {
                info!("README is out of date: {}", self.readme.display());
                Ok(UpdateOutcome::OutOfDate)
            }
            UpdateMode::Write => {
                tokio::fs::write(&self.readme, updated)
                    .await
                    .map_err(|e| Error::Io {
                        path: self.readme.clone(),
                        source: e,
                    })?;
                info!("README updated successfully");
                Ok(UpdateOutcome::Updated)
            }
        }
    }

    async fn read(&self) -> Result<String> {
        debug!("Reading {}", self.readme.display());
        tokio::fs::read_to_string(&self.readme)
            .await
            .map_err(|e| Error::Io {
                path: self.readme.clone(),
                source: e,
            })
    }
}
