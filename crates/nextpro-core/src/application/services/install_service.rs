//! Dependency installation and husky setup.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::{
    ports::{CommandSpec, Filesystem, ProcessRunner, Stage, Warning},
    services::command::run_checked,
};
use crate::domain::IntegrationSet;
use crate::error::NextProResult;
use crate::templates::{manifest, paths};

pub const HUSKY_WARNING: &str =
    "Husky initialization had issues, but hooks are already set up";

pub struct DependencyInstaller<'a> {
    runner: &'a dyn ProcessRunner,
    fs: &'a dyn Filesystem,
    yarn: &'a str,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, fs: &'a dyn Filesystem, yarn: &'a str) -> Self {
        Self { runner, fs, yarn }
    }

    /// `yarn add` the runtime set, then `yarn add -D` the dev set. Either
    /// failing is fatal. Husky is initialised only when `.husky` is absent,
    /// and its failure is returned as a warning.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn install(&self, root: &Path, integrations: &IntegrationSet) -> NextProResult<Vec<Warning>> {
        let dependencies = manifest::dependency_names(integrations);
        if !dependencies.is_empty() {
            let spec = CommandSpec::new(self.yarn, root).arg("add").args(dependencies);
            run_checked(self.runner, &spec)?;
        }

        let dev_dependencies = manifest::dev_dependency_names();
        if !dev_dependencies.is_empty() {
            let spec = CommandSpec::new(self.yarn, root)
                .args(["add", "-D"])
                .args(dev_dependencies);
            run_checked(self.runner, &spec)?;
        }
        info!("dependencies installed");

        let mut warnings = Vec::new();
        if self.fs.exists(&root.join(paths::HUSKY_DIR)) {
            debug!("{} already present; skipping husky init", paths::HUSKY_DIR);
        } else {
            let spec = CommandSpec::new(self.yarn, root).args(["husky", "init"]);
            if let Err(e) = run_checked(self.runner, &spec) {
                debug!(error = %e, "husky init failed");
                warnings.push(Warning::new(Stage::Install, HUSKY_WARNING));
            }
        }

        Ok(warnings)
    }
}
