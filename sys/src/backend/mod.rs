//! The two interchangeable file backends.
//!
//! Exactly one is active per build, chosen by the `vfs` feature through
//! the [`ActiveBackend`] alias so hot paths never branch on the
//! configuration at runtime. Backends speak the collaborator convention
//! (negative symbolic errors) and know nothing about the caller's
//! error-output slot.

use core::ffi::{CStr, c_int};

use krt_abi::{OpenFlags, SeekWhence, Stat};

// With `vfs` on, the stream backend only backs the unit tests.
#[cfg(any(not(feature = "vfs"), test))]
pub(crate) mod stream;
#[cfg(feature = "vfs")]
pub(crate) mod vfs;

pub(crate) trait FileBackend {
    fn open(path: &CStr, flags: OpenFlags, mode: u32) -> c_int;

    fn read(fd: c_int, dest: &mut [u8]) -> isize;

    fn write(fd: c_int, src: &[u8]) -> isize;

    fn close(fd: c_int) -> c_int;

    fn lseek(fd: c_int, offset: i64, whence: SeekWhence) -> i64;

    fn fcntl(fd: c_int, cmd: c_int, arg: c_int) -> c_int;

    fn fstat(fd: c_int, st: &mut Stat) -> c_int;

    fn stat(path: &CStr, st: &mut Stat) -> c_int;

    fn unlink(path: &CStr) -> c_int;
}

#[cfg(feature = "vfs")]
pub(crate) type ActiveBackend = vfs::VfsBackend;

#[cfg(not(feature = "vfs"))]
pub(crate) type ActiveBackend = stream::StreamBackend;
