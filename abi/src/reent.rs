//! Reentrant call context.

use crate::errno::Errno;

/// Per-call error-output slot, the analogue of thread-local `errno`.
///
/// The C runtime hands one of these (by mutable reference) into every
/// fallible entry point. A failing call writes the symbolic code exactly
/// once; the caller reads it immediately after observing the sentinel
/// return value. The slot has no meaning beyond a single call, so passing
/// it explicitly keeps the whole surface safe for concurrent use without
/// any shared mutable state.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct Reent {
    errno: Errno,
}

impl Reent {
    pub const fn new() -> Self {
        Self { errno: Errno::OK }
    }

    #[inline]
    pub fn set_errno(&mut self, err: Errno) {
        self.errno = err;
    }

    #[inline]
    pub fn clear_errno(&mut self) {
        self.errno = Errno::OK;
    }

    #[inline]
    pub fn errno(&self) -> Errno {
        self.errno
    }
}
