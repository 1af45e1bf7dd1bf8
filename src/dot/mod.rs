//! # Loop vs BLAS dot product
//!
//! One benchmark, three access patterns. Each experiment times a
//! hand-written scalar accumulation loop against repeated calls to the
//! library `ddot` routine over the same data, and reports both elapsed
//! tick counts plus their ratio.
//!
//! The access pattern is the experimental variable:
//!
//! - **repeated-vector**: every iteration reads block 0, handing the
//!   optimizer maximum opportunity to hoist redundant work
//! - **distinct-vectors**: each iteration reads its own block
//! - **flat-counter**: one monotonically advancing index, no per-block
//!   offset arithmetic

pub mod bench;
pub mod code;
pub mod test;

use crate::blas;
use crate::registry::ExperimentRunner;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// The loop-writing style under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPattern {
    /// Same DIM-length block every iteration
    RepeatedVector,
    /// Block `j` on iteration `j`
    DistinctVectors,
    /// Single flat index across the whole buffer
    FlatCounter,
}

impl AccessPattern {
    pub const ALL: [AccessPattern; 3] = [
        AccessPattern::RepeatedVector,
        AccessPattern::DistinctVectors,
        AccessPattern::FlatCounter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccessPattern::RepeatedVector => "repeated-vector",
            AccessPattern::DistinctVectors => "distinct-vectors",
            AccessPattern::FlatCounter => "flat-counter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AccessPattern::RepeatedVector => {
                "Same block every iteration; the optimizer may hoist the redundant work"
            }
            AccessPattern::DistinctVectors => {
                "A different block each iteration, so no computation can be reused"
            }
            AccessPattern::FlatCounter => {
                "One flat index walks the whole buffer, avoiding per-block offset arithmetic"
            }
        }
    }

    /// Narrative line printed above each experiment's report
    pub fn label(self) -> &'static str {
        match self {
            AccessPattern::RepeatedVector => {
                "First we repeat the same random inner product many times:"
            }
            AccessPattern::DistinctVectors => {
                "Next we use all different random inner products, so the compiler can't be smart:"
            }
            AccessPattern::FlatCounter => {
                "Finally we use a flat counter instead of per-block offsets:"
            }
        }
    }
}

/// The two input buffers plus the block geometry they were built for.
///
/// Both buffers are filled completely before any timing starts, so
/// generation cost stays outside every measured interval and the data is
/// unknowable at compile time.
pub struct BenchInput {
    pub dim: usize,
    pub repeats: usize,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
}

impl BenchInput {
    /// Fill both buffers with pseudo-random ratios of two uniform draws,
    /// mirroring the classic `rand()/rand()` recipe.
    ///
    /// Known flaw, kept deliberately: a zero denominator draw produces
    /// `inf` (one chance in 2^32 per element). The original did not guard
    /// against this and neither do we.
    pub fn random(dim: usize, repeats: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let len = dim * repeats;
        let a = (0..len).map(|_| random_ratio(&mut rng)).collect();
        let b = (0..len).map(|_| random_ratio(&mut rng)).collect();
        Self {
            dim,
            repeats,
            a,
            b,
        }
    }

    /// Build from explicit buffers, for deterministic tests.
    ///
    /// # Panics
    /// Panics if either buffer is shorter than `dim * repeats`.
    pub fn from_parts(dim: usize, repeats: usize, a: Vec<f64>, b: Vec<f64>) -> Self {
        assert!(a.len() >= dim * repeats, "buffer A too short");
        assert!(b.len() >= dim * repeats, "buffer B too short");
        Self {
            dim,
            repeats,
            a,
            b,
        }
    }

    /// Total element count covered by the experiments
    pub fn len(&self) -> usize {
        self.dim * self.repeats
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn random_ratio<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<u32>() as f64 / rng.random::<u32>() as f64
}

/// One registered experiment: a single access pattern run against the
/// shared input buffers.
pub struct DotExperiment {
    pattern: AccessPattern,
}

impl DotExperiment {
    pub fn new(pattern: AccessPattern) -> Self {
        Self { pattern }
    }
}

impl ExperimentRunner for DotExperiment {
    fn name(&self) -> &'static str {
        self.pattern.name()
    }

    fn description(&self) -> &'static str {
        self.pattern.description()
    }

    fn pattern(&self) -> AccessPattern {
        self.pattern
    }

    fn run(&self, input: &BenchInput) -> bench::ExperimentReport {
        bench::run_experiment(self.pattern, input)
    }

    fn verify(&self) -> Result<(), String> {
        if !blas::KERNEL_AVAILABLE {
            return Ok(());
        }

        let input = BenchInput::random(16, 8, 0xdead_beef);
        let report = bench::run_experiment(self.pattern, &input);

        let diff = (report.loop_sum - report.blas_sum).abs();
        let tolerance = 1e-6 * report.blas_sum.abs().max(1.0);
        if diff > tolerance {
            return Err(format!(
                "Pattern '{}': loop sum {} and blas sum {} differ by {}",
                self.pattern.name(),
                report.loop_sum,
                report.blas_sum,
                diff
            ));
        }
        Ok(())
    }
}
