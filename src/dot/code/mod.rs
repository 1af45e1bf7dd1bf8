//! Accumulation loops under test.
//!
//! The scalar variants are written exactly the way a benchmark author
//! would write them by hand: indexed loops with a single running
//! accumulator. They are deliberately not expressed as iterator chains,
//! because the per-iteration index arithmetic is part of what is being
//! measured.

use crate::blas;

/// Scalar loop, repeated-vector pattern: `repeats` dot products of
/// block 0. The inner loop is loop-invariant on purpose; whether the
/// optimizer hoists it is what this variant measures.
pub fn sum_loop_repeated(a: &[f64], b: &[f64], dim: usize, repeats: usize) -> f64 {
    debug_assert!(a.len() >= dim && b.len() >= dim);

    let mut d = 0.0;
    for _j in 0..repeats {
        let offset = 0;
        for i in 0..dim {
            d += a[offset + i] * b[offset + i];
        }
    }
    d
}

/// Scalar loop, distinct-vectors pattern: block `j` on iteration `j`.
pub fn sum_loop_distinct(a: &[f64], b: &[f64], dim: usize, repeats: usize) -> f64 {
    debug_assert!(a.len() >= dim * repeats && b.len() >= dim * repeats);

    let mut d = 0.0;
    for j in 0..repeats {
        let offset = dim * j;
        for i in 0..dim {
            d += a[offset + i] * b[offset + i];
        }
    }
    d
}

/// Scalar loop, flat-counter pattern: one index advances monotonically
/// over the full buffers, no per-block offset multiplication.
pub fn sum_loop_flat(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut d = 0.0;
    let mut cc = 0;
    while cc < a.len() {
        d += a[cc] * b[cc];
        cc += 1;
    }
    d
}

/// Library variant, repeated-vector pattern: `repeats` calls to `ddot`
/// on block 0.
pub fn sum_ddot_repeated(a: &[f64], b: &[f64], dim: usize, repeats: usize) -> f64 {
    let mut d = 0.0;
    for _j in 0..repeats {
        d += blas::ddot(dim, &a[..dim], 1, &b[..dim], 1);
    }
    d
}

/// Library variant, blocked pattern: one `ddot` call per DIM-length
/// block. Used against both the distinct-vectors and flat-counter
/// scalar loops.
pub fn sum_ddot_blocked(a: &[f64], b: &[f64], dim: usize, repeats: usize) -> f64 {
    let mut d = 0.0;
    for j in 0..repeats {
        let offset = dim * j;
        d += blas::ddot(dim, &a[offset..], 1, &b[offset..], 1);
    }
    d
}
