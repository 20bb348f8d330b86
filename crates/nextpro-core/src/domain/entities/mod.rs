pub mod common;
pub mod project_structure;
pub mod run_config;

pub use crate::domain::DomainError;
pub use project_structure::ProjectStructure;
pub use run_config::RunConfig;
