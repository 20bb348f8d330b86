//! Git repository initialisation. Never fatal.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::{
    ports::{CommandSpec, ProcessRunner, Stage, Warning},
    services::command::run_checked,
};
use crate::error::NextProResult;

pub const INITIAL_COMMIT_MESSAGE: &str = "chore: initial commit from create-next-pro";
pub const GIT_WARNING: &str = "Could not initialize git repository";

pub struct VcsInitializer<'a> {
    runner: &'a dyn ProcessRunner,
    git: &'a str,
}

impl<'a> VcsInitializer<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, git: &'a str) -> Self {
        Self { runner, git }
    }

    fn sequence(&self, root: &Path) -> [CommandSpec; 3] {
        [
            CommandSpec::new(self.git, root).arg("init").captured(),
            CommandSpec::new(self.git, root).args(["add", "."]).captured(),
            CommandSpec::new(self.git, root)
                .args(["commit", "-m", INITIAL_COMMIT_MESSAGE])
                .captured(),
        ]
    }

    fn try_init(&self, root: &Path) -> NextProResult<()> {
        for spec in self.sequence(root) {
            run_checked(self.runner, &spec)?;
        }
        Ok(())
    }

    /// `git init`, `git add .` and the initial commit. The first failure
    /// stops the sequence and is returned as a single warning.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn initialize(&self, root: &Path) -> Option<Warning> {
        match self.try_init(root) {
            Ok(()) => {
                info!("git repository initialised");
                None
            }
            Err(e) => {
                debug!(error = %e, suggestions = ?e.suggestions(), "git initialisation failed");
                Some(Warning::new(Stage::Git, GIT_WARNING))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{CommandOutcome, StdioMode, output::MockProcessRunner},
    };

    #[test]
    fn runs_init_add_commit_captured() {
        let mut runner = MockProcessRunner::new();
        for args in [vec!["init"], vec!["add", "."], vec!["commit", "-m", INITIAL_COMMIT_MESSAGE]] {
            runner
                .expect_run()
                .withf(move |s| s.is("git", &args) && s.args.len() == args.len() && s.stdio == StdioMode::Capture)
                .times(1)
                .returning(|_| Ok(CommandOutcome::success()));
        }

        assert_eq!(VcsInitializer::new(&runner, "git").initialize(Path::new("/p")), None);
    }

    #[test]
    fn failure_stops_sequence_with_single_warning() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|s| s.is("git", &["init"]))
            .times(1)
            .returning(|_| Ok(CommandOutcome::success()));
        runner
            .expect_run()
            .withf(|s| s.is("git", &["add"]))
            .times(1)
            .returning(|_| Ok(CommandOutcome::exited(128)));
        runner
            .expect_run()
            .withf(|s| s.is("git", &["commit"]))
            .never();

        let warning = VcsInitializer::new(&runner, "git").initialize(Path::new("/p"));
        assert_eq!(warning, Some(Warning::new(Stage::Git, GIT_WARNING)));
    }

    #[test]
    fn missing_git_is_a_warning() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().times(1).returning(|spec| {
            Err(ApplicationError::CommandSpawn {
                command: spec.to_string(),
                reason: "not found".into(),
            }
            .into())
        });

        let warning = VcsInitializer::new(&runner, "git").initialize(Path::new("/p"));
        assert_eq!(warning.map(|w| w.message), Some(GIT_WARNING.to_string()));
    }
}
