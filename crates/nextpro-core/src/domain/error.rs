// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports carry them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown integration '{0}'")]
    UnknownIntegration(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid env file: {0}")]
    InvalidEnvFile(String),

    // ========================================================================
    // Output Structure Violations
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("'{name}' is not a valid project name: {reason}"),
                "Use lowercase letters, numbers, and hyphens only".into(),
                "Examples: my-app, shop-2, next-pro".into(),
            ],
            Self::UnknownIntegration(name) => vec![
                format!("'{name}' is not a known integration"),
                "Known integrations: stripe, supabase, ai".into(),
            ],
            Self::InvalidManifest(msg) => vec![
                format!("package.json could not be updated: {msg}"),
                "Make sure the generated package.json is a valid JSON object".into(),
            ],
            Self::InvalidEnvFile(msg) => vec![
                format!("The env file could not be parsed: {msg}"),
                "Use KEY=value lines; comments start with #".into(),
            ],
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec!["The built-in template set is inconsistent; please report this issue".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnknownIntegration(_)
            | Self::InvalidEnvFile(_) => ErrorCategory::Validation,
            Self::InvalidManifest(_) => ErrorCategory::External,
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    External,
    Internal,
}
