//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file the external generator should have produced is missing.
    #[error("Expected file not found: {path}")]
    MissingFile { path: PathBuf },

    /// An external command could not be started.
    #[error("Failed to run `{command}`: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external command ran and exited unsuccessfully.
    #[error("`{command}` failed with {}", exit_status(*.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The terminal prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The user aborted a prompt.
    #[error("Operation cancelled.")]
    Cancelled,

    /// A shared adapter lock was poisoned by a panicking thread.
    #[error("Adapter lock poisoned: {name}")]
    LockPoisoned { name: &'static str },
}

fn exit_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MissingFile { path } => vec![
                format!("{} was not created by create-next-app", path.display()),
                "Check the create-next-app output above for errors".into(),
            ],
            Self::CommandSpawn { command, .. } => {
                let program = command.split_whitespace().next().unwrap_or(command);
                vec![
                    format!("Make sure `{program}` is installed and on your PATH"),
                    "Tool locations can be overridden in the config file or with CREATE_NEXT_PRO__TOOLS__*".into(),
                ]
            }
            Self::CommandFailed { command, .. } => vec![
                format!("`{command}` did not complete; see its output above"),
                "Check your network connection and registry access".into(),
            ],
            Self::Prompt(_) => vec![
                "Interactive prompts need a terminal".into(),
                "Pass the project name and --with or --minimal to run non-interactively".into(),
            ],
            Self::Cancelled => Vec::new(),
            Self::LockPoisoned { .. } => vec!["This is a bug; please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::MissingFile { .. } | Self::CommandSpawn { .. } | Self::CommandFailed { .. } => {
                ErrorCategory::External
            }
            Self::Prompt(_) => ErrorCategory::Io,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_mentions_exit_code() {
        let err = ApplicationError::CommandFailed {
            command: "yarn add zod".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`yarn add zod` failed with exit code 1");
    }

    #[test]
    fn spawn_failure_names_the_program() {
        let err = ApplicationError::CommandSpawn {
            command: "npx create-next-app@latest my-app".into(),
            reason: "not found".into(),
        };
        assert!(err.suggestions()[0].contains("`npx`"));
        assert_eq!(err.category(), ErrorCategory::External);
    }
}
