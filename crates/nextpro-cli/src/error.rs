//! CLI error type.
//!
//! Everything that reaches `main` is a [`CliError`]. It knows its exit code
//! and renders itself for a terminal or a pipe.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use nextpro_core::error::NextProError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A failure reported by the scaffolding pipeline.
    #[error(transparent)]
    Core(#[from] NextProError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_cancelled())
    }

    /// Cancellation is a clean exit; every other failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        if self.is_cancelled() { 0 } else { 1 }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(e) => e.suggestions(),
            Self::Config { .. } => vec![
                format!(
                    "Check the config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use the CREATE_NEXT_PRO__ prefix, e.g. CREATE_NEXT_PRO__TOOLS__YARN"
                    .into(),
            ],
            Self::Io { .. } => vec!["Check that the terminal or output pipe is still open".into()],
        }
    }

    /// Plain message for cancellation, `Error: ...` plus suggestions otherwise.
    pub fn format_colored(&self, verbose: bool) -> String {
        if self.is_cancelled() {
            return format!("{}\n", self.to_string().yellow());
        }

        let mut out = format!("\n{} {}\n", "\u{2717}".red().bold(), format!("Error: {self}").red().bold());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!("  {} {}\n", "\u{2192}".dimmed(), err.to_string().dimmed()));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed()
            ));
        }
        out
    }

    /// [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        if self.is_cancelled() {
            return format!("{self}\n");
        }

        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!("  Caused by: {err}\n"));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }
        out
    }

    /// Debug-level record of the failure; the user-facing copy comes from
    /// [`Self::format_plain`] or [`Self::format_colored`].
    pub fn log(&self) {
        match self {
            Self::Core(e) => tracing::debug!(category = ?e.category(), "{self}"),
            Self::Config { .. } => tracing::debug!(category = "configuration", "{self}"),
            Self::Io { .. } => tracing::debug!(category = "io", "{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use nextpro_core::application::ApplicationError;

    use super::*;

    fn cancelled() -> CliError {
        NextProError::from(ApplicationError::Cancelled).into()
    }

    fn command_failed() -> CliError {
        NextProError::from(ApplicationError::CommandFailed {
            command: "yarn add zod".into(),
            code: Some(1),
        })
        .into()
    }

    #[test]
    fn cancellation_exits_cleanly() {
        let err = cancelled();
        assert!(err.is_cancelled());
        assert_eq!(err.exit_code(), 0);
        assert_eq!(err.format_plain(false), "Operation cancelled.\n");
    }

    #[test]
    fn fatal_errors_exit_with_one() {
        assert_eq!(command_failed().exit_code(), 1);
        let config = CliError::Config {
            message: "bad".into(),
            source: None,
        };
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn plain_format_has_error_prefix_and_suggestions() {
        let text = command_failed().format_plain(false);
        assert!(text.contains("Error: "));
        assert!(text.contains("yarn add zod"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("--verbose"));
    }

    #[test]
    fn verbose_plain_format_omits_hint() {
        assert!(!command_failed().format_plain(true).contains("Use -v"));
    }

    #[test]
    fn config_errors_point_at_env_prefix() {
        let err = CliError::Config {
            message: "bad".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("CREATE_NEXT_PRO__")));
    }

    #[test]
    fn io_errors_convert() {
        let err: CliError = std::io::Error::other("broken pipe").into();
        assert!(err.to_string().contains("broken pipe"));
        assert_eq!(err.exit_code(), 1);
    }
}
