//! Infrastructure adapters for create-next-pro.
//!
//! This crate implements the driven ports defined in
//! `nextpro_core::application::ports`. It holds all filesystem and process
//! I/O; the in-memory and scripted variants back the workflow tests.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedProcessRunner, SystemProcessRunner};
