//! Thread-to-core pinning for stable measurements.
//!
//! On Linux the running thread is pinned to whichever core it currently
//! occupies, and the previous affinity mask is restored when the guard
//! drops. Other platforms get a no-op guard; macOS only offers affinity
//! hints and Windows pinning is not worth the FFI surface for this tool.

#[cfg(target_os = "linux")]
mod platform {
    /// Previous affinity mask plus success flag
    pub struct Pin {
        saved: libc::cpu_set_t,
        active: bool,
    }

    pub fn pin_to_current_core() -> Pin {
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            let setsize = std::mem::size_of::<libc::cpu_set_t>();
            if libc::sched_getaffinity(0, setsize, &mut saved) != 0 {
                return Pin {
                    saved,
                    active: false,
                };
            }

            let core = libc::sched_getcpu();
            if core < 0 {
                return Pin {
                    saved,
                    active: false,
                };
            }

            let mut only: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut only);
            libc::CPU_SET(core as usize, &mut only);
            let active = libc::sched_setaffinity(0, setsize, &only) == 0;
            Pin { saved, active }
        }
    }

    pub fn unpin(pin: &Pin) {
        if pin.active {
            unsafe {
                let setsize = std::mem::size_of::<libc::cpu_set_t>();
                libc::sched_setaffinity(0, setsize, &pin.saved);
            }
        }
    }

    pub fn is_active(pin: &Pin) -> bool {
        pin.active
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Pin;

    pub fn pin_to_current_core() -> Pin {
        Pin
    }

    pub fn unpin(_pin: &Pin) {}

    pub fn is_active(_pin: &Pin) -> bool {
        false
    }
}

/// RAII guard: pins on construction, restores the original affinity on drop.
pub struct CpuPinGuard {
    pin: platform::Pin,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pin: platform::pin_to_current_core(),
        }
    }

    /// Whether the thread is actually pinned (false where unsupported)
    pub fn is_pinned(&self) -> bool {
        platform::is_active(&self.pin)
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        platform::unpin(&self.pin);
    }
}
