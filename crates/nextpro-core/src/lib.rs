//! create-next-pro core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain, template and application layers for the
//! create-next-pro scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         nextpro-cli (CLI)               │
//! │  (clap, prompts, spinners, config)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InputService, ScaffoldService, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ProcessRunner, Prompter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   nextpro-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//!
//!   Domain + templates: pure logic, no I/O
//!   (IntegrationSet, ProjectStructure, patches, renderers)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nextpro_core::prelude::*;
//!
//! # fn run(fs: Box<dyn Filesystem>, runner: Box<dyn ProcessRunner>) -> NextProResult<()> {
//! let config = RunConfig::new(
//!     ProjectName::parse("my-app")?,
//!     IntegrationSet::from_comma_list("stripe,ai"),
//! );
//! let service = ScaffoldService::new(fs, runner);
//! let report = service.scaffold(&config, std::path::Path::new("."), &NullReporter)?;
//! println!("created {}", report.project_path.display());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod templates;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InputService, RawInput, ScaffoldReport, ScaffoldService, Toolchain,
        ports::{
            CommandOutcome, CommandSpec, Filesystem, NullReporter, ProcessRunner,
            ProgressReporter, Prompter, Stage, Warning,
        },
    };
    pub use crate::domain::{Integration, IntegrationSet, ProjectName, ProjectStructure, RunConfig};
    pub use crate::error::{NextProError, NextProResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
