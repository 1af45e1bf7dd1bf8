//! Measurement protocol for one experiment.
//!
//! Per variant: one tick reading immediately before and one immediately
//! after the full set of `repeats` iterations. The timed region contains
//! nothing but the accumulation loop - no I/O, no allocation. Results are
//! routed through `black_box` and the printed report so the optimizer
//! cannot discard the accumulation outright.

use super::code;
use super::{AccessPattern, BenchInput};
use crate::utils::bench;
use crate::utils::CpuPinGuard;
use std::hint::black_box;

/// Everything one experiment reports: the two sums (sanity check) and the
/// two elapsed tick counts.
#[derive(Clone, Copy, Debug)]
pub struct ExperimentReport {
    pub pattern: AccessPattern,
    /// Running sum from the scalar loop variant
    pub loop_sum: f64,
    /// Running sum from the library variant
    pub blas_sum: f64,
    /// Ticks elapsed over the scalar loop variant
    pub loop_ticks: u64,
    /// Ticks elapsed over the library variant
    pub blas_ticks: u64,
}

impl ExperimentReport {
    /// Primary metric: scalar-loop ticks over library ticks, as
    /// floating-point division. Greater than 1 means the library routine
    /// was faster.
    pub fn ratio(&self) -> f64 {
        self.loop_ticks as f64 / self.blas_ticks as f64
    }
}

/// Run both variants of one experiment on the shared input.
///
/// The thread is pinned to its current core for the duration so the tick
/// counter readings stay comparable.
pub fn run_experiment(pattern: AccessPattern, input: &BenchInput) -> ExperimentReport {
    let _pin = CpuPinGuard::new();

    let dim = input.dim;
    let repeats = input.repeats;
    // Exactly the elements the experiments cover, even if the caller's
    // buffers are longer
    let a = &input.a[..input.len()];
    let b = &input.b[..input.len()];

    let (loop_ticks, loop_sum) = match pattern {
        AccessPattern::RepeatedVector => timed(|| code::sum_loop_repeated(a, b, dim, repeats)),
        AccessPattern::DistinctVectors => timed(|| code::sum_loop_distinct(a, b, dim, repeats)),
        AccessPattern::FlatCounter => timed(|| code::sum_loop_flat(a, b)),
    };

    let (blas_ticks, blas_sum) = match pattern {
        AccessPattern::RepeatedVector => timed(|| code::sum_ddot_repeated(a, b, dim, repeats)),
        AccessPattern::DistinctVectors | AccessPattern::FlatCounter => {
            timed(|| code::sum_ddot_blocked(a, b, dim, repeats))
        }
    };

    ExperimentReport {
        pattern,
        loop_sum,
        blas_sum,
        loop_ticks,
        blas_ticks,
    }
}

#[inline]
fn timed<F: FnOnce() -> f64>(f: F) -> (u64, f64) {
    let start = bench::now();
    let sum = black_box(f());
    let ticks = bench::to_ticks(bench::elapsed(start));
    (ticks, sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_plain_division() {
        let report = ExperimentReport {
            pattern: AccessPattern::DistinctVectors,
            loop_sum: 0.0,
            blas_sum: 0.0,
            loop_ticks: 300,
            blas_ticks: 200,
        };
        assert_eq!(report.ratio(), 300.0 / 200.0);
    }

    #[test]
    fn test_zero_blas_ticks_gives_infinite_ratio() {
        // Coarse clocks can legitimately report zero elapsed ticks
        let report = ExperimentReport {
            pattern: AccessPattern::FlatCounter,
            loop_sum: 0.0,
            blas_sum: 0.0,
            loop_ticks: 10,
            blas_ticks: 0,
        };
        assert!(report.ratio().is_infinite());
    }
}
