//! Application services - orchestrate use cases.
//!
//! Each pipeline stage is its own service borrowing the ports it needs;
//! [`ScaffoldService`] owns the ports and runs the stages in order.

mod command;
pub mod enhance_service;
pub mod generator_service;
pub mod input_service;
pub mod install_service;
pub mod scaffold_service;
pub mod vcs_service;

pub use enhance_service::{EnhanceReport, PatchReport, ProjectEnhancer};
pub use generator_service::ProjectGenerator;
pub use input_service::{InputService, RawInput};
pub use install_service::DependencyInstaller;
pub use scaffold_service::{ScaffoldReport, ScaffoldService, Toolchain};
pub use vcs_service::{INITIAL_COMMIT_MESSAGE, VcsInitializer};
