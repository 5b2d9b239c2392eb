//! `extern "C"` newlib symbol surface.
//!
//! Thin unsafe wrappers that the C runtime links against; each converts
//! raw pointers at the boundary and forwards to the safe entry points.
//! The reent argument is this crate's [`Reent`]; newlib is pointed at it
//! through `__getreent`-style plumbing on the platform side.

#![allow(clippy::missing_safety_doc)]

use core::ffi::{CStr, c_char, c_int, c_void};
use core::slice;

use krt_abi::{Errno, OpenFlags, Pid, Reent, SeekWhence, Stat, Timeval};

use crate::syscalls;

unsafe fn reent<'a>(r: *mut Reent) -> &'a mut Reent {
    unsafe { &mut *r }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _init() {
    syscalls::startup();
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _fini() {
    syscalls::teardown();
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _exit(code: c_int) -> ! {
    syscalls::exit(code);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _sbrk_r(r: *mut Reent, incr: isize) -> *mut c_void {
    syscalls::sbrk(unsafe { reent(r) }, incr) as *mut c_void
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _getpid() -> Pid {
    syscalls::getpid()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _getpid_r(_r: *mut Reent) -> Pid {
    syscalls::getpid()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _kill(pid: Pid, sig: c_int) -> c_int {
    // Non-reentrant form: the code lands in a throwaway slot, callers
    // only see the sentinel.
    let mut r = Reent::new();
    syscalls::kill(&mut r, pid, sig)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _kill_r(r: *mut Reent, pid: Pid, sig: c_int) -> c_int {
    syscalls::kill(unsafe { reent(r) }, pid, sig)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _open_r(
    r: *mut Reent,
    name: *const c_char,
    flags: c_int,
    mode: c_int,
) -> c_int {
    let path = unsafe { CStr::from_ptr(name) };
    syscalls::open(
        unsafe { reent(r) },
        path,
        OpenFlags::from_bits_retain(flags as u32),
        mode as u32,
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _read_r(
    r: *mut Reent,
    fd: c_int,
    dest: *mut c_void,
    count: usize,
) -> isize {
    let buf = unsafe { slice::from_raw_parts_mut(dest as *mut u8, count) };
    syscalls::read(unsafe { reent(r) }, fd, buf)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _write_r(
    r: *mut Reent,
    fd: c_int,
    src: *const c_void,
    count: usize,
) -> isize {
    let buf = unsafe { slice::from_raw_parts(src as *const u8, count) };
    syscalls::write(unsafe { reent(r) }, fd, buf)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _close_r(r: *mut Reent, fd: c_int) -> c_int {
    syscalls::close(unsafe { reent(r) }, fd)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _lseek_r(r: *mut Reent, fd: c_int, offset: i64, whence: c_int) -> i64 {
    let r = unsafe { reent(r) };
    let Some(whence) = SeekWhence::from_c_int(whence) else {
        r.set_errno(Errno::EINVAL);
        return -1;
    };
    syscalls::lseek(r, fd, offset, whence)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _fcntl_r(r: *mut Reent, fd: c_int, cmd: c_int, arg: c_int) -> c_int {
    syscalls::fcntl(unsafe { reent(r) }, fd, cmd, arg)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _fstat_r(r: *mut Reent, fd: c_int, st: *mut Stat) -> c_int {
    syscalls::fstat(unsafe { reent(r) }, fd, unsafe { &mut *st })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _stat_r(r: *mut Reent, name: *const c_char, st: *mut Stat) -> c_int {
    let path = unsafe { CStr::from_ptr(name) };
    syscalls::stat(unsafe { reent(r) }, path, unsafe { &mut *st })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _unlink_r(r: *mut Reent, name: *const c_char) -> c_int {
    let path = unsafe { CStr::from_ptr(name) };
    syscalls::unlink(unsafe { reent(r) }, path)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _isatty_r(r: *mut Reent, fd: c_int) -> c_int {
    syscalls::isatty(unsafe { reent(r) }, fd)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn _gettimeofday_r(
    r: *mut Reent,
    tp: *mut Timeval,
    _tzp: *mut c_void,
) -> c_int {
    syscalls::gettimeofday(unsafe { reent(r) }, unsafe { &mut *tp })
}
