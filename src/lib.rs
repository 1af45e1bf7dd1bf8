//! # Loop vs BLAS
//!
//! Micro-benchmark comparing hand-written scalar dot-product loops against
//! an optimized BLAS-style `ddot` kernel, across three access patterns.

pub mod blas;
pub mod dot;
pub mod registry;
pub mod tui;
pub mod utils;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dot::{AccessPattern, BenchInput, DotExperiment};
    pub use crate::registry::{build_registry, ExperimentRegistry, ExperimentRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_experiments_verify() {
        let registry = build_registry();

        for experiment in registry.all() {
            if let Err(e) = experiment.verify() {
                panic!("Experiment '{}' failed verification: {}", experiment.name(), e);
            }
        }
    }
}
