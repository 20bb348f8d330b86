use std::fmt;

use crate::error::NextProResult;

/// A free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuestion {
    pub message: &'static str,
    pub placeholder: &'static str,
}

/// A multi-select question; an empty selection is a valid answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectQuestion {
    pub message: &'static str,
    pub options: Vec<&'static str>,
}

/// Port for interactive questions.
///
/// A prompter is a short-lived session object: the input collector borrows
/// one mutably for the duration of a run. Every method returns `Ok(None)`
/// when the user cancels.
pub trait Prompter {
    /// Ask for text. `validate` returns the message to show for an invalid
    /// answer, or `None` to accept it.
    fn ask_text(
        &mut self,
        question: &TextQuestion,
        validate: &dyn Fn(&str) -> Option<&'static str>,
    ) -> NextProResult<Option<String>>;

    /// Ask for any number of options; returns the selected indices.
    fn ask_multi_select(
        &mut self,
        question: &MultiSelectQuestion,
    ) -> NextProResult<Option<Vec<usize>>>;
}

/// Pipeline stages, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CreateApp,
    Enhance,
    Install,
    Git,
}

impl Stage {
    /// Shown while the stage runs.
    pub const fn running_message(&self) -> &'static str {
        match self {
            Self::CreateApp => "Creating your Next.js project...",
            Self::Enhance => "Enhancing project with production configurations...",
            Self::Install => "Installing dependencies...",
            Self::Git => "Initializing git repository...",
        }
    }

    /// Shown once the stage completes.
    pub const fn done_message(&self) -> &'static str {
        match self {
            Self::CreateApp => "Next.js app created",
            Self::Enhance => "Project enhanced",
            Self::Install => "Dependencies installed",
            Self::Git => "Git initialized",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateApp => "create-app",
            Self::Enhance => "enhance",
            Self::Install => "install",
            Self::Git => "git",
        })
    }
}

/// A non-fatal problem; the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub stage: Stage,
    pub message: String,
}

impl Warning {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Port for progress notifications.
pub trait ProgressReporter {
    fn stage_started(&self, stage: Stage);
    fn stage_finished(&self, stage: Stage);
    /// The stage ended with a fatal error; no `stage_finished` follows.
    fn stage_failed(&self, stage: Stage);
    fn warning(&self, warning: &Warning);
}

/// Reporter that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn stage_started(&self, _stage: Stage) {}
    fn stage_finished(&self, _stage: Stage) {}
    fn stage_failed(&self, _stage: Stage) {}
    fn warning(&self, _warning: &Warning) {}
}
