//! Fallback backend for builds without a filesystem.
//!
//! There is no file namespace: anything that implies one, or that implies
//! file-position or metadata semantics, fails with `ENODEV` before doing
//! any work. Read and write ignore the descriptor entirely and block on
//! the one registered character stream; their counts are authoritative
//! and never produce an errno write.

use core::ffi::{CStr, c_int};

use krt_abi::{Errno, OpenFlags, SeekWhence, Stat};
use krt_lib::stream;

use super::FileBackend;

pub(crate) struct StreamBackend;

impl FileBackend for StreamBackend {
    fn open(_path: &CStr, _flags: OpenFlags, _mode: u32) -> c_int {
        Errno::ENODEV.as_neg_return()
    }

    fn read(_fd: c_int, dest: &mut [u8]) -> isize {
        stream::char_stream().read(dest)
    }

    fn write(_fd: c_int, src: &[u8]) -> isize {
        stream::char_stream().write(src)
    }

    fn close(_fd: c_int) -> c_int {
        // Nothing is ever successfully opened here, so nothing can be
        // successfully closed.
        Errno::ENODEV.as_neg_return()
    }

    fn lseek(_fd: c_int, _offset: i64, _whence: SeekWhence) -> i64 {
        Errno::ENODEV.as_neg_return() as i64
    }

    fn fcntl(_fd: c_int, _cmd: c_int, _arg: c_int) -> c_int {
        Errno::ENODEV.as_neg_return()
    }

    fn fstat(_fd: c_int, _st: &mut Stat) -> c_int {
        Errno::ENODEV.as_neg_return()
    }

    fn stat(_path: &CStr, _st: &mut Stat) -> c_int {
        Errno::ENODEV.as_neg_return()
    }

    fn unlink(_path: &CStr) -> c_int {
        Errno::ENODEV.as_neg_return()
    }
}
