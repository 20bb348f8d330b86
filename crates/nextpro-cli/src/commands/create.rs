//! The scaffolding command.
//!
//! Responsibility: collect input, wire the real adapters into the core
//! service and display results. No business logic lives here.

use tracing::{debug, info, instrument};

use nextpro_adapters::{LocalFilesystem, SystemProcessRunner};
use nextpro_core::application::{InputService, RawInput, ScaffoldService};

use crate::{
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, SpinnerReporter},
    prompt::terminal_prompter,
};

/// Run the whole pipeline for one project.
///
/// 1. Show the banner
/// 2. Resolve the name and integrations (flags first, prompts for the rest)
/// 3. Scaffold under the current directory with the configured toolchain
/// 4. Print the next-steps note
#[instrument(skip_all)]
pub fn execute(raw: RawInput, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    output.banner()?;

    let mut prompter = terminal_prompter();
    let run_config = InputService::collect(raw, prompter.as_mut())?;

    let cwd = std::env::current_dir()?;
    debug!(cwd = %cwd.display(), tools = ?config.tools, "starting scaffold");

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
    )
    .with_toolchain(config.tools);

    let reporter = SpinnerReporter::new(output);
    let report = service.scaffold(&run_config, &cwd, &reporter)?;

    for patch in &report.patches {
        debug!(file = %patch.file.display(), step = patch.step, outcome = ?patch.outcome, "patch");
    }
    info!(
        path = %report.project_path.display(),
        warnings = report.warnings.len(),
        "project created"
    );

    output.project_ready(run_config.name().as_str())?;
    Ok(())
}
