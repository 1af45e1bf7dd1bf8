//! CPU tick counter for precise micro-benchmarking.
//!
//! x86_64 uses RDTSC bracketed by LFENCE; aarch64 reads CNTVCT_EL0, the
//! fixed-frequency virtual timer accessible from userspace.

/// Read the current CPU tick counter.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_cycles_x86_64()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cycles_aarch64()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        compile_error!(
            "cpu_cycles feature requires x86_64 or aarch64; build with --features use_time"
        );
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles_x86_64() -> u64 {
    use core::arch::x86_64::*;
    unsafe {
        // LFENCE keeps speculative execution from drifting across the read
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles_aarch64() -> u64 {
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cycles_monotonic() {
        let c1 = read_cycles();
        let c2 = read_cycles();
        assert!(c2 >= c1, "tick counter should not run backwards");
    }
}
