//! The library dot-product collaborator.
//!
//! Exposes a double-precision inner product with the CBLAS `ddot` contract:
//! `ddot(n, x, incx, y, incy)`. The implementation is an opaque C kernel
//! compiled by the build script; the benchmark trusts its result and treats
//! it purely as the performance baseline.

#[cfg(blas_kernel_active)]
mod ffi {
    use std::os::raw::{c_double, c_int};

    extern "C" {
        pub fn lvb_ddot(
            n: c_int,
            x: *const c_double,
            incx: c_int,
            y: *const c_double,
            incy: c_int,
        ) -> c_double;
    }
}

/// Whether the kernel was compiled (requires GCC, Clang, or MSVC at build time)
#[cfg(blas_kernel_active)]
pub const KERNEL_AVAILABLE: bool = true;

#[cfg(not(blas_kernel_active))]
pub const KERNEL_AVAILABLE: bool = false;

/// Name of the C compiler that built the kernel, if any
pub const KERNEL_COMPILER: Option<&str> = option_env!("BLAS_KERNEL_COMPILER");

/// Inner product of `n` elements of `x` and `y` at strides `incx`/`incy`.
///
/// # Panics
/// Panics if either slice is too short for `n` elements at its stride.
#[cfg(blas_kernel_active)]
pub fn ddot(n: usize, x: &[f64], incx: usize, y: &[f64], incy: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    assert!(x.len() >= 1 + (n - 1) * incx, "x too short for n at incx");
    assert!(y.len() >= 1 + (n - 1) * incy, "y too short for n at incy");

    unsafe {
        ffi::lvb_ddot(
            n as i32,
            x.as_ptr(),
            incx as i32,
            y.as_ptr(),
            incy as i32,
        )
    }
}

// Stub for builds without a C compiler
#[cfg(not(blas_kernel_active))]
pub fn ddot(_n: usize, _x: &[f64], _incx: usize, _y: &[f64], _incy: usize) -> f64 {
    panic!("BLAS kernel not compiled (requires GCC, Clang, or MSVC)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddot_basic() {
        if !KERNEL_AVAILABLE {
            return;
        }
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 2.0, 2.0, 2.0, 2.0];
        // 2*(1+2+3+4+5) = 30
        assert!((ddot(5, &x, 1, &y, 1) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_ddot_empty() {
        if !KERNEL_AVAILABLE {
            return;
        }
        assert_eq!(ddot(0, &[], 1, &[], 1), 0.0);
    }

    #[test]
    fn test_ddot_strided() {
        if !KERNEL_AVAILABLE {
            return;
        }
        let x = [1.0, 9.0, 2.0, 9.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        // 1*4 + 2*5 + 3*6 = 32
        assert!((ddot(3, &x, 2, &y, 1) - 32.0).abs() < 1e-12);
    }
}
