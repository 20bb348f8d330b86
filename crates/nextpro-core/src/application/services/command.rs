use tracing::debug;

use crate::application::{
    ApplicationError,
    ports::{CommandOutcome, CommandSpec, ProcessRunner},
};
use crate::error::NextProResult;

/// Run `spec`, treating a non-zero exit as an error.
pub(crate) fn run_checked(runner: &dyn ProcessRunner, spec: &CommandSpec) -> NextProResult<CommandOutcome> {
    debug!(command = %spec, cwd = %spec.cwd.display(), "running");
    let outcome = runner.run(spec)?;
    if outcome.is_success() {
        Ok(outcome)
    } else {
        Err(ApplicationError::CommandFailed {
            command: spec.to_string(),
            code: outcome.code,
        }
        .into())
    }
}
