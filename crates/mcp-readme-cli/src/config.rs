//! Generator configuration.
//!
//! Loaded from `mcp-readme.toml` in TOML format. Relative paths in the file
//! are resolved against the directory containing it.
//!
//! # Examples
//!
//! ```toml
//! readme = "README.md"
//! catalog = "tools.json"
//! generator = "update-readme.js"
//!
//! [options]
//! command = "node"
//! args = ["cli.js", "--help"]
//! example = "npx @playwright/mcp@latest --help"
//! timeout_secs = 30
//! ```

use crate::cli::Cli;
use mcp_readme_core::{Error, GeneratorId, Result};
use mcp_readme_gen::CommandHelpSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "mcp-readme.toml";

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// README to update
    pub readme: PathBuf,

    /// Tool catalog JSON file
    pub catalog: PathBuf,

    /// Identifier embedded in the README markers
    pub generator: GeneratorId,

    /// How to obtain the CLI help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsConfig>,
}

/// Settings for the options section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    /// Program to run
    pub command: String,

    /// Arguments, normally ending with the help flag
    #[serde(default = "default_help_args")]
    pub args: Vec<String>,

    /// Invocation shown at the top of the options block
    /// (default: the command line that is run)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Working directory for the command (default: the config file's directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Kill the command after this many seconds (default: wait indefinitely)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_help_args() -> Vec<String> {
    vec!["--help".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            catalog: PathBuf::from("tools.json"),
            generator: GeneratorId::default(),
            options: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the TOML is malformed or contains
    /// unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config: {e}"),
        })
    }

    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Otherwise
    /// [`DEFAULT_CONFIG_FILE`] is used when present and defaults when not.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and
    /// `Error::ConfigError` if it cannot be parsed.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !tokio::fs::try_exists(&default).await.unwrap_or(false) {
                    debug!("Config file not found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| Error::Io {
            path: path.clone(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse {}: {e}", path.display()),
        })?;
        debug!("Loaded config from {}", path.display());

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_paths(base))
    }

    /// Resolves relative paths against `base`.
    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if base.as_os_str().is_empty() {
            return self;
        }

        self.readme = base.join(&self.readme);
        self.catalog = base.join(&self.catalog);
        if let Some(options) = &mut self.options {
            options.cwd = Some(
                options
                    .cwd
                    .as_ref()
                    .map_or_else(|| base.to_path_buf(), |cwd| base.join(cwd)),
            );
        }
        self
    }

    /// Applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if `--generator` is invalid.
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(readme) = &cli.readme {
            self.readme.clone_from(readme);
        }
        if let Some(catalog) = &cli.catalog {
            self.catalog.clone_from(catalog);
        }
        if let Some(generator) = &cli.generator {
            self.generator = GeneratorId::new(generator.as_str())?;
        }
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the options command is blank or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if let Some(options) = &self.options {
            if options.command.trim().is_empty() {
                return Err(Error::ConfigError {
                    message: "options.command cannot be empty".to_string(),
                });
            }
            if options.timeout_secs == Some(0) {
                return Err(Error::ConfigError {
                    message: "options.timeout_secs must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl OptionsConfig {
    /// Builds the help source for this configuration.
    #[must_use]
    pub fn help_source(&self) -> CommandHelpSource {
        let mut source = CommandHelpSource::new(self.command.clone(), self.args.clone());
        if let Some(cwd) = &self.cwd {
            source = source.with_cwd(cwd);
        }
        if let Some(secs) = self.timeout_secs {
            source = source.with_timeout(Duration::from_secs(secs));
        }
        source
    }

    /// Example invocation shown in the options block.
    #[must_use]
    pub fn example(&self) -> String {
        self.example
            .clone()
            .unwrap_or_else(|| self.help_source().display_command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const FULL: &str = r#"
readme = "README.md"
catalog = "utils/tools.json"
generator = "update-readme.js"

[options]
command = "node"
args = ["cli.js", "--help"]
example = "npx @playwright/mcp@latest --help"
timeout_secs = 30
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.readme, PathBuf::from("README.md"));
        assert_eq!(config.catalog, PathBuf::from("tools.json"));
        assert_eq!(config.generator.as_str(), "mcp-readme");
        assert!(config.options.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(FULL).unwrap();
        assert_eq!(config.generator.as_str(), "update-readme.js");

        let options = config.options.unwrap();
        assert_eq!(options.command, "node");
        assert_eq!(options.args, ["cli.js", "--help"]);
        assert_eq!(options.example(), "npx @playwright/mcp@latest --help");
        assert_eq!(options.timeout_secs, Some(30));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[options]\ncommand = \"my-server\"\n").unwrap();
        assert_eq!(config.readme, PathBuf::from("README.md"));

        let options = config.options.unwrap();
        assert_eq!(options.args, ["--help"]);
        assert_eq!(options.example(), "my-server --help");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("readmee = \"x\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_generator_rejected() {
        let err = Config::from_toml_str("generator = \"\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config =
            Config::from_toml_str("[options]\ncommand = \"node\"\ntimeout_secs = 0\n").unwrap();
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_validate_rejects_blank_command() {
        let config = Config::from_toml_str("[options]\ncommand = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp-readme.toml");
        std::fs::write(&path, FULL).unwrap();

        let config = Config::load(Some(path.as_path())).await.unwrap();
        assert_eq!(config.readme, dir.path().join("README.md"));
        assert_eq!(config.catalog, dir.path().join("utils/tools.json"));
        assert_eq!(
            config.options.unwrap().cwd,
            Some(dir.path().to_path_buf())
        );
    }

    #[tokio::test]
    async fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(dir.path().join("missing.toml").as_path()))
            .await
            .unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_apply_cli_overrides() {
        let mut config = Config::default();
        let cli = Cli::parse_from([
            "mcp-readme",
            "--readme",
            "docs/README.md",
            "--generator",
            "update-readme.js",
        ]);

        config.apply_cli(&cli).unwrap();
        assert_eq!(config.readme, PathBuf::from("docs/README.md"));
        assert_eq!(config.catalog, PathBuf::from("tools.json"));
        assert_eq!(config.generator.as_str(), "update-readme.js");
    }

    #[test]
    fn test_apply_cli_rejects_bad_generator() {
        let mut config = Config::default();
        let cli = Cli::parse_from(["mcp-readme", "--generator", "a -->"]);
        assert!(config.apply_cli(&cli).unwrap_err().is_config_error());
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::from_toml_str(FULL).unwrap();
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml_str(&serialized).unwrap(), config);
    }
}
