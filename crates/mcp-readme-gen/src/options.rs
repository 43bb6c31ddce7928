//! CLI options rendering.
//!
//! Captures the target CLI's `--help` output, cuts it down to the options
//! list, and wraps it in a fenced code block.

use async_trait::async_trait;
use mcp_readme_core::{Error, Result};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Line token marking the last line before the options list.
pub const OPTIONS_START_TOKEN: &str = "--version";

/// Line token marking the first line after the options list.
pub const OPTIONS_END_TOKEN: &str = "--help";

/// Source of CLI help text.
///
/// Production code spawns the CLI through [`CommandHelpSource`]; tests
/// substitute canned output.
#[async_trait]
pub trait HelpSource: Send + Sync + std::fmt::Debug {
    /// Returns the full help output.
    ///
    /// # Errors
    ///
    /// Returns an error if the help text cannot be obtained.
    async fn help_text(&self) -> Result<String>;
}

/// Obtains help text by running a command and capturing its stdout.
///
/// # Examples
///
/// ```
/// use mcp_readme_gen::CommandHelpSource;
/// use std::time::Duration;
///
/// let source = CommandHelpSource::new("node", ["cli.js", "--help"])
///     .with_timeout(Duration::from_secs(30));
/// assert_eq!(source.display_command(), "node cli.js --help");
/// ```
#[derive(Debug, Clone)]
pub struct CommandHelpSource {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl CommandHelpSource {
    /// Creates a source running `program` with `args`.
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            timeout: None,
        }
    }

    /// Runs the command in `cwd` instead of the current directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Kills the command and fails if it runs longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Command line as shown in logs and errors.
    #[must_use]
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn subprocess_error(&self, message: String, source: Option<std::io::Error>) -> Error {
        Error::Subprocess {
            command: self.display_command(),
            message,
            source,
        }
    }
}

#[async_trait]
impl HelpSource for CommandHelpSource {
    async fn help_text(&self) -> Result<String> {
        let command_line = self.display_command();
        debug!("Running {command_line}");

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, command.output())
                .await
                .map_err(|_| Error::Timeout {
                    operation: command_line.clone(),
                    duration_secs: timeout.as_secs(),
                })?,
            None => command.output().await,
        }
        .map_err(|e| self.subprocess_error(format!("failed to spawn: {e}"), Some(e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.subprocess_error(
                format!("{} ({})", output.status, stderr.trim()),
                None,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Cuts help output down to the options list.
///
/// Drops every line up to and including the first line containing
/// `--version`, then every line from the first remaining line containing
/// `--help` onward.
///
/// # Errors
///
/// Returns `Error::HelpMarkerNotFound` if either token is missing.
///
/// # Examples
///
/// ```
/// use mcp_readme_gen::trim_help;
///
/// let help = "Usage: ...\n--version  print version\n--foo  desc\n--help  show help\n";
/// assert_eq!(trim_help(help).unwrap(), vec!["--foo  desc"]);
/// ```
pub fn trim_help(help: &str) -> Result<Vec<String>> {
    let lines: Vec<&str> = help.lines().collect();

    let first = lines
        .iter()
        .position(|line| line.contains(OPTIONS_START_TOKEN))
        .ok_or_else(|| Error::HelpMarkerNotFound {
            marker: OPTIONS_START_TOKEN.to_string(),
        })?;
    let rest = &lines[first + 1..];

    let last = rest
        .iter()
        .position(|line| line.contains(OPTIONS_END_TOKEN))
        .ok_or_else(|| Error::HelpMarkerNotFound {
            marker: OPTIONS_END_TOKEN.to_string(),
        })?;

    Ok(rest[..last].iter().map(ToString::to_string).collect())
}

/// Produces the fenced options block.
///
/// # Errors
///
/// Propagates failures of the help source and of [`trim_help`].
pub async fn render_options(source: &dyn HelpSource, example: &str) -> Result<Vec<String>> {
    let help = source.help_text().await?;
    let options = trim_help(&help)?;
    debug!("Captured {} option lines", options.len());

    let mut lines = Vec::with_capacity(options.len() + 3);
    lines.push("```".to_string());
    lines.push(format!("> {example}"));
    lines.extend(options);
    lines.push("```".to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CannedHelp(&'static str);

    #[async_trait]
    impl HelpSource for CannedHelp {
        async fn help_text(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_trim_help_basic() {
        let help = "Usage: ...\n--version  print version\n--foo  desc\n--help  show help";
        assert_eq!(trim_help(help).unwrap(), vec!["--foo  desc"]);
    }

    #[test]
    fn test_trim_help_keeps_inner_lines_verbatim() {
        let help = "Usage: mcp [options]\n\nOptions:\n  -V, --version   output the version number\n  --browser <browser>   browser to use\n                        (default: chrome)\n  --headless            run headless\n  -h, --help            display help for command\n";
        assert_eq!(
            trim_help(help).unwrap(),
            vec![
                "  --browser <browser>   browser to use",
                "                        (default: chrome)",
                "  --headless            run headless",
            ]
        );
    }

    #[test]
    fn test_trim_help_handles_crlf() {
        let help = "--version\r\n--foo\r\n--help\r\n";
        assert_eq!(trim_help(help).unwrap(), vec!["--foo"]);
    }

    #[test]
    fn test_trim_help_missing_version() {
        let err = trim_help("Usage\n--foo\n--help").unwrap_err();
        assert!(err.is_help_marker_error());
        assert!(err.to_string().contains("--version"));
    }

    #[test]
    fn test_trim_help_missing_help() {
        let err = trim_help("--version\n--foo").unwrap_err();
        assert!(err.to_string().contains("--help"));
    }

    #[test]
    fn test_trim_help_help_before_version_is_ignored() {
        let help = "--help is available\n--version\n--foo\n--help";
        assert_eq!(trim_help(help).unwrap(), vec!["--foo"]);
    }

    #[tokio::test]
    async fn test_render_options_fences_output() {
        let source = CannedHelp("Usage: ...\n--version  print version\n--foo  desc\n--help  show help\n");
        let lines = render_options(&source, "npx @playwright/mcp@latest --help")
            .await
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "```",
                "> npx @playwright/mcp@latest --help",
                "--foo  desc",
                "```",
            ]
        );
    }

    #[test]
    fn test_display_command() {
        let source = CommandHelpSource::new("node", Vec::<String>::new());
        assert_eq!(source.display_command(), "node");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_help_source_captures_stdout() {
        let source = CommandHelpSource::new("sh", ["-c", "printf 'a\\nb\\n'"]);
        assert_eq!(source.help_text().await.unwrap(), "a\nb\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_help_source_with_debug_logging() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = CommandHelpSource::new("sh", ["-c", "printf 'x\\n'"])
            .with_timeout(Duration::from_secs(10));
        assert_eq!(source.help_text().await.unwrap(), "x\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_help_source_nonzero_exit() {
        let source = CommandHelpSource::new("sh", ["-c", "echo boom >&2; exit 3"]);
        let err = source.help_text().await.unwrap_err();
        assert!(err.is_subprocess_error());
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_command_help_source_spawn_failure() {
        let source = CommandHelpSource::new("definitely-not-a-real-binary-4242", ["--help"]);
        let err = source.help_text().await.unwrap_err();
        assert!(err.is_subprocess_error());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_help_source_timeout() {
        let source = CommandHelpSource::new("sleep", ["5"]).with_timeout(Duration::from_millis(50));
        let err = source.help_text().await.unwrap_err();
        assert!(err.is_timeout());
    }
}
