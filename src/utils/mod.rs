//! Utility modules for measurement and execution control.

pub mod bench;
pub mod cpu_affinity;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{elapsed, now, time_seed, to_ticks, unit_name, Measurement};
pub use cpu_affinity::CpuPinGuard;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub use cycles::read_cycles;
