//! Process runner backed by `std::process::Command`.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use nextpro_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandSpec, ProcessRunner, StdioMode},
    },
    error::NextProResult,
};

/// Production process runner. Blocks until the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &CommandSpec) -> NextProResult<CommandOutcome> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).current_dir(&spec.cwd);

        let spawn_error = |e: std::io::Error| ApplicationError::CommandSpawn {
            command: spec.to_string(),
            reason: e.to_string(),
        };

        let outcome = match spec.stdio {
            StdioMode::Inherit => {
                let status = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                CommandOutcome {
                    code: status.code(),
                    ..CommandOutcome::default()
                }
            }
            StdioMode::Capture => {
                let output = command.stdin(Stdio::null()).output().map_err(spawn_error)?;
                CommandOutcome {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
        };

        debug!(command = %spec, code = ?outcome.code, "process exited");
        if !outcome.stderr.is_empty() {
            trace!(stderr = %outcome.stderr.trim_end(), "captured stderr");
        }
        Ok(outcome)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_output_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", dir.path())
            .args(["-c", "echo hello; echo oops >&2; exit 3"])
            .captured();

        let outcome = SystemProcessRunner::new().run(&spec).unwrap();

        assert_eq!(outcome.code, Some(3));
        assert_eq!(outcome.stdout, "hello\n");
        assert_eq!(outcome.stderr, "oops\n");
        assert!(!outcome.is_success());
    }

    #[test]
    fn runs_in_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let spec = CommandSpec::new("ls", dir.path()).captured();

        let outcome = SystemProcessRunner::new().run(&spec).unwrap();
        assert!(outcome.stdout.contains("marker"));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let spec = CommandSpec::new("definitely-not-a-real-tool-4f1c", ".").captured();
        let err = SystemProcessRunner::new().run(&spec).unwrap_err();
        assert!(err.to_string().starts_with("Failed to run `definitely-not-a-real-tool-4f1c`"));
    }
}
