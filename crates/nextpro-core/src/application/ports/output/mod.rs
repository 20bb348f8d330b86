//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `nextpro-adapters` crate provides the filesystem and process
//! implementations; the CLI provides the terminal ones.

mod interaction;
mod process;

use std::path::Path;

use crate::error::NextProResult;

pub use interaction::{
    MultiSelectQuestion, NullReporter, ProgressReporter, Prompter, Stage, TextQuestion, Warning,
};
pub use process::{CommandOutcome, CommandSpec, ProcessRunner, StdioMode};

#[cfg(test)]
pub use process::MockProcessRunner;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nextpro_adapters::filesystem::LocalFilesystem` (production)
/// - `nextpro_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute or relative to the process working directory; the
/// services always join them onto the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NextProResult<()>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &str) -> NextProResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> NextProResult<String>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> NextProResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
