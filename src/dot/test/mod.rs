//! Tests for the dot product experiments.

#[cfg(test)]
mod tests {
    use crate::blas;
    use crate::dot::bench::run_experiment;
    use crate::dot::code;
    use crate::dot::{AccessPattern, BenchInput};
    use crate::tui;

    /// Accumulation order differs between the loop and the kernel, so the
    /// sums only agree up to rounding
    const REL_TOLERANCE: f64 = 1e-6;

    fn assert_sums_close(loop_sum: f64, blas_sum: f64, context: &str) {
        let diff = (loop_sum - blas_sum).abs();
        let tolerance = REL_TOLERANCE * blas_sum.abs().max(1.0);
        assert!(
            diff <= tolerance,
            "{}: loop sum {} vs blas sum {}, diff {}",
            context,
            loop_sum,
            blas_sum,
            diff
        );
    }

    #[test]
    fn test_sums_agree_for_every_pattern() {
        if !blas::KERNEL_AVAILABLE {
            return;
        }

        let input = BenchInput::random(32, 16, 42);
        for pattern in AccessPattern::ALL {
            let report = run_experiment(pattern, &input);
            assert_sums_close(report.loop_sum, report.blas_sum, pattern.name());
        }
    }

    #[test]
    fn test_random_fill_is_finite_and_non_negative() {
        // A zero denominator draw would produce inf; that flaw is kept on
        // purpose, so this guards the test inputs, not the generator
        let input = BenchInput::random(64, 8, 7);

        assert_eq!(input.a.len(), input.len());
        assert_eq!(input.b.len(), input.len());
        for &v in input.a.iter().chain(input.b.iter()) {
            assert!(v.is_finite(), "element {} is not finite", v);
            assert!(v >= 0.0, "element {} is negative", v);
        }
    }

    #[test]
    fn test_distinct_loop_matches_blockwise_reference() {
        let dim = 4;
        let repeats = 2;
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let b = vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5];

        let mut expected = 0.0;
        for j in 0..repeats {
            let offset = dim * j;
            for i in 0..dim {
                expected += a[offset + i] * b[offset + i];
            }
        }

        let got = code::sum_loop_distinct(&a, &b, dim, repeats);
        assert_eq!(got, expected);
    }

    #[test]
    fn test_end_to_end_tiny_run() {
        if !blas::KERNEL_AVAILABLE {
            return;
        }

        // 1*3 + 2*4 = 11
        let input = BenchInput::from_parts(2, 1, vec![1.0, 2.0], vec![3.0, 4.0]);

        for pattern in AccessPattern::ALL {
            let report = run_experiment(pattern, &input);
            assert_eq!(report.loop_sum, 11.0, "{}", pattern.name());
            assert_eq!(report.blas_sum, 11.0, "{}", pattern.name());

            let rendered = tui::format_report(&report);
            assert!(rendered.contains("Result (loop) = 11\n"), "{}", rendered);
            assert!(rendered.contains("Result (blas) = 11\n"), "{}", rendered);
        }
    }

    #[test]
    fn test_flat_counter_covers_same_elements_as_blocked_loop() {
        // Same traversal order and a single accumulator in both variants,
        // so the sums must match exactly, not just within tolerance
        let input = BenchInput::random(8, 4, 99);

        let blocked = code::sum_loop_distinct(&input.a, &input.b, input.dim, input.repeats);
        let flat = code::sum_loop_flat(&input.a, &input.b);
        assert_eq!(flat, blocked);
    }

    #[test]
    fn test_repeated_pattern_scales_with_repeats() {
        // Block 0 every iteration: the sum is exactly repeats times the
        // single-block sum when every addend is identical
        let dim = 4;
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![2.0, 2.0, 2.0, 2.0];
        let one = code::sum_loop_repeated(&a, &b, dim, 1);
        let five = code::sum_loop_repeated(&a, &b, dim, 5);
        assert_eq!(one, 20.0);
        assert_eq!(five, 100.0);
    }
}
