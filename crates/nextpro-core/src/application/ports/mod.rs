//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nextpro-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ProcessRunner`: External commands (`npx`, `yarn`, `git`)
//!   - `Prompter`: Interactive questions
//!   - `ProgressReporter`: Stage and warning notifications

pub mod output;

pub use output::{
    CommandOutcome, CommandSpec, Filesystem, MultiSelectQuestion, NullReporter, ProcessRunner,
    ProgressReporter, Prompter, Stage, StdioMode, TextQuestion, Warning,
};
