//! The POSIX-like reentrant entry points handed to the C runtime.
//!
//! File operations delegate to the build-selected backend and route every
//! failure through the translation helpers; the remaining calls (process
//! identity, signal stub, tty query, time, termination) are implemented
//! here directly. No entry point ever leaks the backend's negative-code
//! convention to the caller.

use core::ffi::{CStr, c_int};

use krt_abi::{
    Errno, OpenFlags, Pid, Reent, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO, SeekWhence, Stat,
    Timeval, US_PER_SEC,
};
use krt_lib::{InitFlag, stream};

use crate::backend::{ActiveBackend, FileBackend};
use crate::services;
use crate::translate::{cvt, cvt_off, cvt_ssize, cvt_stat};

/// Sentinel returned by [`sbrk`] when the heap cannot grow.
pub const SBRK_FAILED: usize = usize::MAX;

static STARTUP_DONE: InitFlag = InitFlag::new();

/// Runtime startup hook: one-time character stream bring-up. Invoked by
/// the C runtime's init array before `main`.
pub fn startup() {
    if !STARTUP_DONE.init_once() {
        return;
    }
    if let Some(s) = stream::try_char_stream() {
        s.init();
    }
}

/// Runtime shutdown hook. Nothing to release in this layer.
pub fn teardown() {}

/// Grow the heap for the C runtime's allocator.
///
/// Returns the base of the granted range, or [`SBRK_FAILED`] with
/// `ENOMEM` in the error slot when the region is exhausted. Heap
/// exhaustion is an ordinary failure here; the runtime's allocator
/// decides what to do with it.
pub fn sbrk(r: &mut Reent, incr: isize) -> usize {
    match krt_mm::sbrk(incr) {
        Ok(base) => base,
        Err(err) => {
            r.set_errno(err);
            SBRK_FAILED
        }
    }
}

/// Open a file. Returns a descriptor number, or `-1` with the error slot
/// set.
pub fn open(r: &mut Reent, path: &CStr, flags: OpenFlags, mode: u32) -> c_int {
    cvt(r, ActiveBackend::open(path, flags, mode))
}

/// Read from an open descriptor. Returns the count read.
pub fn read(r: &mut Reent, fd: c_int, dest: &mut [u8]) -> isize {
    cvt_ssize(r, ActiveBackend::read(fd, dest))
}

/// Write to an open descriptor. Returns the count written.
pub fn write(r: &mut Reent, fd: c_int, src: &[u8]) -> isize {
    cvt_ssize(r, ActiveBackend::write(fd, src))
}

/// Close a descriptor.
///
/// Whatever the outcome, the descriptor is invalid afterwards: no further
/// use, not even a retry of `close`.
pub fn close(r: &mut Reent, fd: c_int) -> c_int {
    cvt(r, ActiveBackend::close(fd))
}

/// Reposition the file offset. Returns the new offset.
pub fn lseek(r: &mut Reent, fd: c_int, offset: i64, whence: SeekWhence) -> i64 {
    cvt_off(r, ActiveBackend::lseek(fd, offset, whence))
}

/// Query or set descriptor options.
pub fn fcntl(r: &mut Reent, fd: c_int, cmd: c_int, arg: c_int) -> c_int {
    cvt(r, ActiveBackend::fcntl(fd, cmd, arg))
}

/// Status of an open descriptor. Returns exactly `0` on success.
pub fn fstat(r: &mut Reent, fd: c_int, st: &mut Stat) -> c_int {
    cvt_stat(r, ActiveBackend::fstat(fd, st))
}

/// Status of a file by name. Returns exactly `0` on success.
pub fn stat(r: &mut Reent, path: &CStr, st: &mut Stat) -> c_int {
    cvt_stat(r, ActiveBackend::stat(path, st))
}

/// Remove a name from the filesystem.
pub fn unlink(r: &mut Reent, path: &CStr) -> c_int {
    cvt(r, ActiveBackend::unlink(path))
}

/// Identifier of the current execution context. Pure, never fails; before
/// a scheduler is wired the whole system is one context, reported as pid
/// zero.
pub fn getpid() -> Pid {
    match services::try_sched() {
        Some(sched) => sched.active_pid(),
        None => 0,
    }
}

/// Send a signal.
///
/// Delegates to the registered delivery strategy when a platform provides
/// one; the default strategy fails every request with `ESRCH`.
pub fn kill(r: &mut Reent, pid: Pid, sig: c_int) -> c_int {
    match services::try_signal() {
        Some(delivery) => match delivery.kill(pid, sig) {
            Ok(()) => 0,
            Err(err) => {
                r.set_errno(err);
                -1
            }
        },
        None => {
            r.set_errno(Errno::ESRCH);
            -1
        }
    }
}

/// Whether `fd` refers to a terminal-like stream. The three reserved
/// descriptors are terminals in every backend; the error slot is cleared
/// either way.
pub fn isatty(r: &mut Reent, fd: c_int) -> c_int {
    r.clear_errno();
    if fd == STDIN_FILENO || fd == STDOUT_FILENO || fd == STDERR_FILENO {
        1
    } else {
        0
    }
}

/// Current time from the monotonic clock collaborator.
///
/// Without a clock this fails with `ENOSYS` and leaves `tv` untouched.
pub fn gettimeofday(r: &mut Reent, tv: &mut Timeval) -> c_int {
    let Some(clock) = services::try_clock() else {
        r.set_errno(Errno::ENOSYS);
        return -1;
    };
    let now = clock.now_us();
    tv.tv_sec = (now / US_PER_SEC) as i64;
    tv.tv_usec = (now % US_PER_SEC) as i64;
    0
}

/// Terminate the process without cleaning up files.
///
/// Logs the exit code, asks the platform to cut power, and spins; control
/// never returns to any caller.
pub fn exit(code: c_int) -> ! {
    log::info!("exit {code}: powering off");
    if let Some(power) = services::try_power() {
        power.off();
    }
    loop {
        core::hint::spin_loop();
    }
}
