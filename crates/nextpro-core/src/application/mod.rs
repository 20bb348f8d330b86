//! Application layer for create-next-pro.
//!
//! This layer contains:
//! - **Services**: One per pipeline stage plus the [`ScaffoldService`] that
//!   sequences them
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and the template
//! renderer but contains no template content itself.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DependencyInstaller, EnhanceReport, InputService, PatchReport, ProjectEnhancer,
    ProjectGenerator, RawInput, ScaffoldReport, ScaffoldService, Toolchain, VcsInitializer,
};

pub use ports::{Filesystem, ProcessRunner, ProgressReporter, Prompter};

pub use error::ApplicationError;
