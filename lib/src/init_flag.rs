//! Atomic init-once flags.

use core::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a one-time setup step has run.
///
/// ```ignore
/// static STARTUP: InitFlag = InitFlag::new();
///
/// pub fn startup() {
///     if !STARTUP.init_once() {
///         return; // already done
///     }
///     // ... perform setup ...
/// }
/// ```
#[repr(transparent)]
pub struct InitFlag {
    flag: AtomicBool,
}

impl InitFlag {
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Atomically claim the flag.
    ///
    /// Returns `true` if this call performed the claim (the caller should
    /// run the setup), `false` if it was already set.
    #[inline]
    pub fn init_once(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Reset to unset. For subsystems that support re-arming (the heap
    /// region before the runtime starts) and for tests.
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Default for InitFlag {
    fn default() -> Self {
        Self::new()
    }
}
