use crate::domain::value_objects::{IntegrationSet, ProjectName};

/// Everything one run needs to know, collected from flags or prompts.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    name: ProjectName,
    integrations: IntegrationSet,
    minimal: bool,
}

impl RunConfig {
    pub fn new(name: ProjectName, integrations: IntegrationSet) -> Self {
        Self {
            name,
            integrations,
            minimal: false,
        }
    }

    /// A run with no optional integrations.
    pub fn minimal(name: ProjectName) -> Self {
        Self {
            name,
            integrations: IntegrationSet::empty(),
            minimal: true,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn integrations(&self) -> &IntegrationSet {
        &self.integrations
    }

    pub fn is_minimal(&self) -> bool {
        self.minimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Integration;

    #[test]
    fn minimal_has_no_integrations() {
        let cfg = RunConfig::minimal(ProjectName::unchecked("my-app"));
        assert!(cfg.is_minimal());
        assert!(cfg.integrations().is_empty());
    }

    #[test]
    fn regular_run_keeps_selection() {
        let set: IntegrationSet = [Integration::Ai].into_iter().collect();
        let cfg = RunConfig::new(ProjectName::unchecked("my-app"), set);
        assert!(!cfg.is_minimal());
        assert!(cfg.integrations().contains(Integration::Ai));
    }
}
