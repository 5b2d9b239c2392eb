//! Platform collaborator interfaces.
//!
//! These traits live in `abi` (no dependencies) so that:
//! - `krt-mm` and `krt-sys` can depend on `abi` and call through trait
//!   objects
//! - the platform crate can depend on `abi` and implement them
//! - board bring-up code can depend on both and wire them together
//!
//! Implementations are registered once, before the C runtime starts, and
//! stay registered for the lifetime of the process.

use core::ffi::{CStr, c_int};

use crate::errno::Errno;
use crate::fcntl::{OpenFlags, SeekWhence};
use crate::stat::Stat;

/// Identifier of an execution context, as the scheduler counts them.
pub type Pid = i32;

/// Virtual filesystem collaborator.
///
/// Every operation returns a non-negative value on success and a negative
/// symbolic error (`-errno`) on failure; the shim translates that into the
/// caller's error-output slot. Implementations never see the slot.
pub trait Vfs: Send + Sync {
    /// Open `path`. Returns a descriptor number.
    fn open(&self, path: &CStr, flags: OpenFlags, mode: u32) -> c_int;

    /// Read up to `dest.len()` bytes. Returns the count read.
    fn read(&self, fd: c_int, dest: &mut [u8]) -> isize;

    /// Write up to `src.len()` bytes. Returns the count written.
    fn write(&self, fd: c_int, src: &[u8]) -> isize;

    /// Close `fd`. The descriptor is invalid afterwards even when close
    /// itself fails; callers must not retry.
    fn close(&self, fd: c_int) -> c_int;

    /// Reposition the file offset. Returns the new offset.
    fn lseek(&self, fd: c_int, offset: i64, whence: SeekWhence) -> i64;

    /// Query or set descriptor options, see man 3p fcntl.
    fn fcntl(&self, fd: c_int, cmd: c_int, arg: c_int) -> c_int;

    /// Fill `st` for an open descriptor.
    fn fstat(&self, fd: c_int, st: &mut Stat) -> c_int;

    /// Fill `st` for a path.
    fn stat(&self, path: &CStr, st: &mut Stat) -> c_int;

    /// Remove a name from the filesystem.
    fn unlink(&self, path: &CStr) -> c_int;
}

/// Raw character stream collaborator (typically a UART).
///
/// `read` blocks until at least one byte is available; there is no
/// buffering, so bytes arriving while no read is in progress are lost.
/// `write` blocks until the underlying transmission completes. Both
/// return the count transferred, which the caller treats as authoritative.
pub trait CharStream: Send + Sync {
    /// One-time hardware setup, invoked from the runtime startup hook.
    fn init(&self) {}

    fn read(&self, dest: &mut [u8]) -> isize;

    fn write(&self, src: &[u8]) -> isize;
}

/// Interrupt-disable primitive backing the heap's critical section.
///
/// `disable` returns an opaque restore token; calls must nest correctly
/// and be legal from any execution context, including interrupt level.
pub trait IrqControl: Send + Sync {
    fn disable(&self) -> usize;

    fn restore(&self, state: usize);
}

/// Monotonic microsecond clock collaborator. Optional.
pub trait MonotonicClock: Send + Sync {
    /// Microseconds since boot.
    fn now_us(&self) -> u64;
}

/// Power-management collaborator.
pub trait PowerControl: Send + Sync {
    /// Cut power. Expected not to return; the exit path spins if it does.
    fn off(&self);
}

/// Scheduler query collaborator.
pub trait SchedQuery: Send + Sync {
    /// Identifier of the currently running execution context.
    fn active_pid(&self) -> Pid;
}

/// Signal-delivery strategy. Optional.
///
/// The default behavior with no strategy registered is to fail every
/// `kill` with `ESRCH`; a platform that supports signal delivery replaces
/// that by registering an implementation.
pub trait SignalDelivery: Send + Sync {
    fn kill(&self, pid: Pid, sig: c_int) -> Result<(), Errno>;
}
