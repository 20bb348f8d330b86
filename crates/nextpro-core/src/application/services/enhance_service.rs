//! Project enhancement: manifest merge, config patches and template files.
//!
//! Best-effort and non-transactional. A failure part-way leaves whatever was
//! already written in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::{
    ApplicationError,
    ports::{Filesystem, Stage, Warning},
};
use crate::domain::{
    DomainError, DomainValidator, FsEntry, IntegrationSet, PatchOutcome, ProjectStructure,
    patch::{enable_standalone_output, extend_eslint_config, inject_trpc_provider},
};
use crate::error::NextProResult;
use crate::templates::{self, manifest, paths};

/// Outcome of one patch step on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// Relative to the project root.
    pub file: PathBuf,
    pub step: &'static str,
    pub outcome: PatchOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnhanceReport {
    pub files_written: usize,
    pub patches: Vec<PatchReport>,
    pub warnings: Vec<Warning>,
}

impl EnhanceReport {
    fn record(&mut self, file: &str, step: &'static str, outcome: PatchOutcome) {
        if let PatchOutcome::AnchorMissing { anchor } = &outcome {
            debug!(file, step, anchor, "patch anchor not found");
            self.warnings.push(Warning::new(
                Stage::Enhance,
                format!("Could not patch {file} ({step}): {outcome}"),
            ));
        } else {
            debug!(file, step, %outcome, "patch");
        }
        self.patches.push(PatchReport {
            file: PathBuf::from(file),
            step,
            outcome,
        });
    }

    fn warn(&mut self, message: String) {
        debug!("{message}");
        self.warnings.push(Warning::new(Stage::Enhance, message));
    }
}

pub struct ProjectEnhancer<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ProjectEnhancer<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Apply every enhancement to the project at `root`.
    ///
    /// A missing or malformed `package.json` is fatal; every other patch
    /// problem is reported as a warning.
    #[instrument(skip_all, fields(root = %root.display(), integrations = %integrations))]
    pub fn enhance(&self, root: &Path, integrations: &IntegrationSet) -> NextProResult<EnhanceReport> {
        let mut report = EnhanceReport::default();

        self.update_manifest(root, integrations)?;
        self.update_next_config(root, &mut report)?;

        let structure = templates::render_project(integrations);
        DomainValidator::validate_project_structure(&structure)?;
        report.files_written = self.write_structure(root, &structure)?;

        self.update_layout(root, &mut report)?;
        self.update_eslint_config(root, &mut report)?;

        info!(
            files = report.files_written,
            warnings = report.warnings.len(),
            "project enhanced"
        );
        Ok(report)
    }

    fn update_manifest(&self, root: &Path, integrations: &IntegrationSet) -> NextProResult<()> {
        let path = root.join(paths::PACKAGE_JSON);
        if !self.fs.exists(&path) {
            return Err(ApplicationError::MissingFile { path }.into());
        }

        let source = self.fs.read_to_string(&path)?;
        let base = serde_json::from_str(&source)
            .map_err(|e| DomainError::InvalidManifest(e.to_string()))?;
        let enhanced = manifest::enhance_manifest(base, integrations)?;
        self.fs
            .write_file(&path, &manifest::to_manifest_string(&enhanced)?)?;

        debug!("package.json updated");
        Ok(())
    }

    fn update_next_config(&self, root: &Path, report: &mut EnhanceReport) -> NextProResult<()> {
        let Some(file) = paths::NEXT_CONFIG_CANDIDATES
            .into_iter()
            .find(|candidate| self.fs.exists(&root.join(candidate)))
        else {
            report.warn("No next.config file found; standalone output not enabled".into());
            return Ok(());
        };

        let path = root.join(file);
        let patched = enable_standalone_output(&self.fs.read_to_string(&path)?);
        if patched.outcome.is_applied() {
            self.fs.write_file(&path, &patched.content)?;
        }
        report.record(file, "standalone-output", patched.outcome);
        Ok(())
    }

    fn write_structure(&self, root: &Path, structure: &ProjectStructure) -> NextProResult<usize> {
        let mut written = 0;
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.fs.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.fs.create_dir_all(parent)?;
                    }

                    self.fs.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.fs.set_permissions(&path, true)?;
                    }
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    fn update_layout(&self, root: &Path, report: &mut EnhanceReport) -> NextProResult<()> {
        let path = root.join(paths::ROOT_LAYOUT);
        if !self.fs.exists(&path) {
            report.warn(format!(
                "{} not found; TRPCProvider was not added to the layout",
                paths::ROOT_LAYOUT
            ));
            return Ok(());
        }

        let patched = inject_trpc_provider(&self.fs.read_to_string(&path)?);
        if patched.changed() {
            self.fs.write_file(&path, &patched.content)?;
        }
        report.record(paths::ROOT_LAYOUT, "provider-import", patched.import);
        report.record(paths::ROOT_LAYOUT, "provider-wrap", patched.wrap);
        Ok(())
    }

    fn update_eslint_config(&self, root: &Path, report: &mut EnhanceReport) -> NextProResult<()> {
        let path = root.join(paths::ESLINT_CONFIG);
        if !self.fs.exists(&path) {
            // Flat-config projects have no .eslintrc.json.
            debug!("no {} to extend", paths::ESLINT_CONFIG);
            return Ok(());
        }

        let patched = extend_eslint_config(&self.fs.read_to_string(&path)?);
        if patched.outcome.is_applied() {
            self.fs.write_file(&path, &patched.content)?;
        }
        report.record(paths::ESLINT_CONFIG, "eslint-extends", patched.outcome);
        Ok(())
    }
}
