//! Experiment registry for discovery and execution.
//!
//! Each access pattern registers as one experiment; the CLI lists, finds,
//! and runs them through this interface.

use crate::dot::bench::ExperimentReport;
use crate::dot::{AccessPattern, BenchInput, DotExperiment};

/// Trait implemented by every registered experiment
pub trait ExperimentRunner: Send + Sync {
    /// Name of the experiment (e.g. "distinct-vectors")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// The access pattern this experiment exercises
    fn pattern(&self) -> AccessPattern;

    /// Run both variants against the shared input and report
    fn run(&self, input: &BenchInput) -> ExperimentReport;

    /// Check the two variants agree on a small fixed input
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all experiments
pub struct ExperimentRegistry {
    experiments: Vec<Box<dyn ExperimentRunner>>,
}

impl ExperimentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            experiments: Vec::new(),
        }
    }

    /// Register an experiment
    pub fn register<E: ExperimentRunner + 'static>(&mut self, experiment: E) {
        self.experiments.push(Box::new(experiment));
    }

    /// Get all registered experiments
    pub fn all(&self) -> &[Box<dyn ExperimentRunner>] {
        &self.experiments
    }

    /// Find an experiment by name
    pub fn find(&self, name: &str) -> Option<&dyn ExperimentRunner> {
        self.experiments
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    /// List experiment names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.experiments.iter().map(|e| e.name()).collect()
    }
}

impl Default for ExperimentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with one experiment per access pattern
pub fn build_registry() -> ExperimentRegistry {
    let mut registry = ExperimentRegistry::new();

    for pattern in AccessPattern::ALL {
        registry.register(DotExperiment::new(pattern));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_all_patterns() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec!["repeated-vector", "distinct-vectors", "flat-counter"]
        );
    }

    #[test]
    fn test_registry_find() {
        let registry = build_registry();
        let found = registry.find("flat-counter").expect("should exist");
        assert_eq!(found.pattern(), AccessPattern::FlatCounter);
        assert!(registry.find("bogus").is_none());
    }
}
