//! Runs the external Next.js generator.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::{
    ports::{CommandSpec, ProcessRunner},
    services::command::run_checked,
};
use crate::domain::ProjectName;
use crate::error::NextProResult;

/// Flags passed to `create-next-app` after the project name.
pub const CREATE_NEXT_APP_FLAGS: [&str; 9] = [
    "--typescript",
    "--tailwind",
    "--app",
    "--src-dir",
    "--import-alias",
    "@/*",
    "--use-yarn",
    "--yes",
    "--no-git",
];

pub struct ProjectGenerator<'a> {
    runner: &'a dyn ProcessRunner,
    npx: &'a str,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, npx: &'a str) -> Self {
        Self { runner, npx }
    }

    pub fn command(&self, name: &ProjectName, cwd: &Path) -> CommandSpec {
        CommandSpec::new(self.npx, cwd)
            .arg("create-next-app@latest")
            .arg(name.as_str())
            .args(CREATE_NEXT_APP_FLAGS)
    }

    /// Generate the baseline project in `cwd/<name>` and return its path.
    ///
    /// Output goes straight to the terminal. Any failure is fatal.
    #[instrument(skip_all, fields(project = %name))]
    pub fn generate(&self, name: &ProjectName, cwd: &Path) -> NextProResult<PathBuf> {
        run_checked(self.runner, &self.command(name, cwd))?;
        let project_path = cwd.join(name.as_str());
        info!(path = %project_path.display(), "baseline project generated");
        Ok(project_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{CommandOutcome, StdioMode, output::MockProcessRunner},
    };
    use crate::error::NextProError;

    #[test]
    fn runs_create_next_app_with_fixed_flags() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|spec| {
                spec.to_string()
                    == "npx create-next-app@latest my-app --typescript --tailwind --app --src-dir --import-alias @/* --use-yarn --yes --no-git"
                    && spec.stdio == StdioMode::Inherit
                    && spec.cwd == Path::new("/work")
            })
            .times(1)
            .returning(|_| Ok(CommandOutcome::success()));

        let generator = ProjectGenerator::new(&runner, "npx");
        let path = generator
            .generate(&ProjectName::unchecked("my-app"), Path::new("/work"))
            .unwrap();

        assert_eq!(path, Path::new("/work/my-app"));
    }

    #[test]
    fn non_zero_exit_is_fatal() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(CommandOutcome::exited(1)));

        let err = ProjectGenerator::new(&runner, "npx")
            .generate(&ProjectName::unchecked("app"), Path::new("."))
            .unwrap_err();

        assert!(matches!(
            err,
            NextProError::Application(ApplicationError::CommandFailed { code: Some(1), .. })
        ));
    }

    #[test]
    fn spawn_failure_is_fatal() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|spec| {
            Err(ApplicationError::CommandSpawn {
                command: spec.to_string(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let result = ProjectGenerator::new(&runner, "/missing/npx")
            .generate(&ProjectName::unchecked("app"), Path::new("."));
        assert!(result.is_err());
    }
}
