//! Scripted process runner for tests.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use nextpro_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandSpec, ProcessRunner},
    },
    error::NextProResult,
};

#[derive(Debug, Clone)]
enum Response {
    Exit(i32),
    NotFound,
}

#[derive(Debug, Clone)]
struct Rule {
    program: String,
    args: Vec<String>,
    response: Response,
}

#[derive(Debug, Default)]
struct Inner {
    rules: Vec<Rule>,
    calls: Vec<CommandSpec>,
}

/// Records every command and answers from a script instead of spawning.
///
/// Commands without a matching rule succeed. Rules match on the program and
/// a leading-argument prefix; the first matching rule wins. Clones share the
/// script and the call log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProcessRunner {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> NextProResult<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| {
            ApplicationError::LockPoisoned {
                name: "scripted process runner",
            }
            .into()
        })
    }

    fn push(self, program: &str, args: &[&str], response: Response) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.rules.push(Rule {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                response,
            });
        }
        self
    }

    /// Make matching commands exit with `code`.
    pub fn exit_with(self, program: &str, args: &[&str], code: i32) -> Self {
        self.push(program, args, Response::Exit(code))
    }

    /// Make every command for `program` fail to spawn.
    pub fn not_found(self, program: &str) -> Self {
        self.push(program, &[], Response::NotFound)
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.lock().map(|inner| inner.calls.clone()).unwrap_or_default()
    }

    /// Every command run so far, rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl ProcessRunner for ScriptedProcessRunner {
    fn run(&self, spec: &CommandSpec) -> NextProResult<CommandOutcome> {
        let mut inner = self.lock()?;
        inner.calls.push(spec.clone());

        let response = inner
            .rules
            .iter()
            .find(|rule| {
                let prefix: Vec<&str> = rule.args.iter().map(String::as_str).collect();
                spec.is(&rule.program, &prefix)
            })
            .map(|rule| rule.response.clone());

        debug!(command = %spec, ?response, "scripted run");
        match response {
            None => Ok(CommandOutcome::success()),
            Some(Response::Exit(code)) => Ok(CommandOutcome::exited(code)),
            Some(Response::NotFound) => Err(ApplicationError::CommandSpawn {
                command: spec.to_string(),
                reason: "No such file or directory (scripted)".into(),
            }
            .into()),
        }
    }
}
