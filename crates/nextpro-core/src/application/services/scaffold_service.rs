//! Scaffold Service - main application orchestrator.
//!
//! This service runs the whole pipeline for one [`RunConfig`]:
//! 1. Generate the baseline app with `create-next-app`
//! 2. Enhance it with the template set and config patches
//! 3. Install dependencies
//! 4. Initialise git
//!
//! Stages run strictly in order. Fatal errors abort the run; warnings are
//! reported as they happen and collected into the [`ScaffoldReport`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, ProcessRunner, ProgressReporter, Stage, Warning},
        services::{
            DependencyInstaller, PatchReport, ProjectEnhancer, ProjectGenerator, VcsInitializer,
        },
    },
    domain::RunConfig,
    error::NextProResult,
};

/// Executables used for the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    pub npx: String,
    pub yarn: String,
    pub git: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npx: "npx".into(),
            yarn: "yarn".into(),
            git: "git".into(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    pub warnings: Vec<Warning>,
    pub patches: Vec<PatchReport>,
}

/// Main scaffolding service.
///
/// Owns the driven ports and lends them to the per-stage services.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    toolchain: Toolchain,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nextpro_core::application::{Filesystem, ProcessRunner, ScaffoldService, Toolchain};
    ///
    /// # fn build(filesystem: Box<dyn Filesystem>, runner: Box<dyn ProcessRunner>) {
    /// let service = ScaffoldService::new(filesystem, runner)
    ///     .with_toolchain(Toolchain::default());
    /// # let _ = service;
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            filesystem,
            runner,
            toolchain: Toolchain::default(),
        }
    }

    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Scaffold a new project under `cwd`.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            integrations = %config.integrations(),
            cwd = %cwd.display()
        )
    )]
    pub fn scaffold(
        &self,
        config: &RunConfig,
        cwd: &Path,
        progress: &dyn ProgressReporter,
    ) -> NextProResult<ScaffoldReport> {
        let fs = self.filesystem.as_ref();
        let runner = self.runner.as_ref();
        let mut warnings = Vec::new();

        let project_path = stage(progress, Stage::CreateApp, || {
            ProjectGenerator::new(runner, &self.toolchain.npx).generate(config.name(), cwd)
        })?;

        let enhanced = stage(progress, Stage::Enhance, || {
            ProjectEnhancer::new(fs).enhance(&project_path, config.integrations())
        })?;
        report_all(progress, &enhanced.warnings);
        warnings.extend(enhanced.warnings);

        let install_warnings = stage(progress, Stage::Install, || {
            DependencyInstaller::new(runner, fs, &self.toolchain.yarn)
                .install(&project_path, config.integrations())
        })?;
        report_all(progress, &install_warnings);
        warnings.extend(install_warnings);

        let git_warning = stage(progress, Stage::Git, || {
            Ok(VcsInitializer::new(runner, &self.toolchain.git).initialize(&project_path))
        })?;
        report_all(progress, git_warning.as_slice());
        warnings.extend(git_warning);

        info!(
            path = %project_path.display(),
            warnings = warnings.len(),
            "scaffold completed"
        );

        Ok(ScaffoldReport {
            project_path,
            warnings,
            patches: enhanced.patches,
        })
    }
}

fn stage<T>(
    progress: &dyn ProgressReporter,
    stage: Stage,
    run: impl FnOnce() -> NextProResult<T>,
) -> NextProResult<T> {
    progress.stage_started(stage);
    match run() {
        Ok(value) => {
            progress.stage_finished(stage);
            Ok(value)
        }
        Err(e) => {
            progress.stage_failed(stage);
            Err(e)
        }
    }
}

fn report_all(progress: &dyn ProgressReporter, warnings: &[Warning]) {
    for warning in warnings {
        progress.warning(warning);
    }
}
