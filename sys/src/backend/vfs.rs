//! Filesystem backend: one-to-one forwards to the registered VFS
//! collaborator. Results flow back unchanged; the shim owns translation.

use core::ffi::{CStr, c_int};

use krt_abi::{OpenFlags, SeekWhence, Stat};

use super::FileBackend;
use crate::services;

pub(crate) struct VfsBackend;

impl FileBackend for VfsBackend {
    fn open(path: &CStr, flags: OpenFlags, mode: u32) -> c_int {
        services::vfs().open(path, flags, mode)
    }

    fn read(fd: c_int, dest: &mut [u8]) -> isize {
        services::vfs().read(fd, dest)
    }

    fn write(fd: c_int, src: &[u8]) -> isize {
        services::vfs().write(fd, src)
    }

    fn close(fd: c_int) -> c_int {
        services::vfs().close(fd)
    }

    fn lseek(fd: c_int, offset: i64, whence: SeekWhence) -> i64 {
        services::vfs().lseek(fd, offset, whence)
    }

    fn fcntl(fd: c_int, cmd: c_int, arg: c_int) -> c_int {
        services::vfs().fcntl(fd, cmd, arg)
    }

    fn fstat(fd: c_int, st: &mut Stat) -> c_int {
        services::vfs().fstat(fd, st)
    }

    fn stat(path: &CStr, st: &mut Stat) -> c_int {
        services::vfs().stat(path, st)
    }

    fn unlink(path: &CStr) -> c_int {
        services::vfs().unlink(path)
    }
}
