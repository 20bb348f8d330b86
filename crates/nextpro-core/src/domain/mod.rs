//! Core domain layer for create-next-pro.
//!
//! This module contains pure logic with no I/O. Filesystem, subprocess and
//! terminal concerns are reached through ports defined in the application
//! layer.
//!
//! - **No I/O**: No filesystem, network, or process calls
//! - **Immutable values**: `RunConfig`, `IntegrationSet` and `ProjectName`
//!   never change after construction
//! - **Reported patches**: text patches return a [`PatchOutcome`] instead of
//!   failing silently

pub mod entities;
pub mod error;
pub mod patch;
pub mod value_objects;

mod validation;

pub use entities::{
    common::Permissions,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    run_config::RunConfig,
};

pub use error::{DomainError, ErrorCategory};

pub use patch::{LayoutPatch, PatchOutcome, Patched};

pub use value_objects::{Integration, IntegrationSet, ProjectName};

pub use validation::DomainValidator;
