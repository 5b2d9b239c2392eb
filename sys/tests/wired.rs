//! Whole-shim test with every collaborator seam wired, the way platform
//! bring-up wires them. Registration is process-global, so everything
//! runs as one test.

#![cfg(feature = "vfs")]

use core::ffi::{CStr, c_int};
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::Mutex;

use krt_abi::{
    CharStream, Errno, MonotonicClock, OpenFlags, Pid, Reent, SchedQuery, SeekWhence,
    SignalDelivery, Stat, Timeval, Vfs,
};
use krt_sys::services;
use krt_sys::syscalls;

/// In-memory single-file filesystem, just enough surface to drive the
/// shim end to end.
struct OneFileFs {
    content: Mutex<Vec<u8>>,
    position: Mutex<i64>,
    open_fd: AtomicI32,
}

impl OneFileFs {
    const FD: c_int = 3;
}

impl Vfs for OneFileFs {
    fn open(&self, path: &CStr, _flags: OpenFlags, _mode: u32) -> c_int {
        if path.to_bytes() != b"/data/boot.cfg" {
            return Errno::ENOENT.as_neg_return();
        }
        self.open_fd.store(Self::FD, Ordering::SeqCst);
        *self.position.lock().unwrap() = 0;
        Self::FD
    }

    fn read(&self, fd: c_int, dest: &mut [u8]) -> isize {
        if fd != self.open_fd.load(Ordering::SeqCst) {
            return Errno::EBADF.as_neg_return() as isize;
        }
        let content = self.content.lock().unwrap();
        let mut pos = self.position.lock().unwrap();
        let start = (*pos as usize).min(content.len());
        let n = dest.len().min(content.len() - start);
        dest[..n].copy_from_slice(&content[start..start + n]);
        *pos += n as i64;
        n as isize
    }

    fn write(&self, fd: c_int, src: &[u8]) -> isize {
        if fd != self.open_fd.load(Ordering::SeqCst) {
            return Errno::EBADF.as_neg_return() as isize;
        }
        let mut content = self.content.lock().unwrap();
        let mut pos = self.position.lock().unwrap();
        let start = *pos as usize;
        let len = content.len();
        content.resize(start.max(len), 0);
        content.truncate(start);
        content.extend_from_slice(src);
        *pos += src.len() as i64;
        src.len() as isize
    }

    fn close(&self, fd: c_int) -> c_int {
        if fd != self.open_fd.swap(-1, Ordering::SeqCst) {
            return Errno::EBADF.as_neg_return();
        }
        0
    }

    fn lseek(&self, fd: c_int, offset: i64, whence: SeekWhence) -> i64 {
        if fd != self.open_fd.load(Ordering::SeqCst) {
            return Errno::EBADF.as_neg_return() as i64;
        }
        let len = self.content.lock().unwrap().len() as i64;
        let mut pos = self.position.lock().unwrap();
        let new = match whence {
            SeekWhence::Set => offset,
            SeekWhence::Current => *pos + offset,
            SeekWhence::End => len + offset,
        };
        if new < 0 {
            return Errno::EINVAL.as_neg_return() as i64;
        }
        *pos = new;
        new
    }

    fn fcntl(&self, _fd: c_int, _cmd: c_int, _arg: c_int) -> c_int {
        0
    }

    fn fstat(&self, fd: c_int, st: &mut Stat) -> c_int {
        if fd != self.open_fd.load(Ordering::SeqCst) {
            return Errno::EBADF.as_neg_return();
        }
        st.st_size = self.content.lock().unwrap().len() as i64;
        // Non-zero success value; the shim must still return exactly 0.
        1
    }

    fn stat(&self, path: &CStr, st: &mut Stat) -> c_int {
        if path.to_bytes() != b"/data/boot.cfg" {
            return Errno::ENOENT.as_neg_return();
        }
        st.st_size = self.content.lock().unwrap().len() as i64;
        0
    }

    fn unlink(&self, path: &CStr) -> c_int {
        if path.to_bytes() != b"/data/boot.cfg" {
            return Errno::ENOENT.as_neg_return();
        }
        self.content.lock().unwrap().clear();
        0
    }
}

struct EchoStream {
    inits: AtomicU64,
}

impl CharStream for EchoStream {
    fn init(&self) {
        self.inits.fetch_add(1, Ordering::SeqCst);
    }

    fn read(&self, dest: &mut [u8]) -> isize {
        if !dest.is_empty() {
            dest[0] = b'\n';
        }
        1
    }

    fn write(&self, src: &[u8]) -> isize {
        src.len() as isize
    }
}

struct FixedClock;

impl MonotonicClock for FixedClock {
    fn now_us(&self) -> u64 {
        // 5002 seconds and change.
        5_002_000_123
    }
}

struct SingleThreadSched;

impl SchedQuery for SingleThreadSched {
    fn active_pid(&self) -> Pid {
        7
    }
}

struct PidOneOnly;

impl SignalDelivery for PidOneOnly {
    fn kill(&self, pid: Pid, _sig: c_int) -> Result<(), Errno> {
        if pid == 1 { Ok(()) } else { Err(Errno::ESRCH) }
    }
}

static FS: OneFileFs = OneFileFs {
    content: Mutex::new(Vec::new()),
    position: Mutex::new(0),
    open_fd: AtomicI32::new(-1),
};
static STREAM: EchoStream = EchoStream {
    inits: AtomicU64::new(0),
};

#[test]
fn wired_platform_round_trip() {
    services::register_vfs(&FS);
    services::register_clock(&FixedClock);
    services::register_sched_query(&SingleThreadSched);
    services::register_signal_delivery(&PidOneOnly);
    krt_lib::stream::register_char_stream(&STREAM);

    // Startup hook initializes the stream exactly once.
    syscalls::startup();
    syscalls::startup();
    assert_eq!(STREAM.inits.load(Ordering::SeqCst), 1);

    let mut r = Reent::new();

    // Heap: arm a region and grow it the way the allocator would.
    krt_mm::heap_init(0x2000_0000, 0x2000_0800);
    let first = syscalls::sbrk(&mut r, 256);
    let second = syscalls::sbrk(&mut r, 256);
    assert_eq!(second, first + 256);
    assert_eq!(syscalls::sbrk(&mut r, 0x1000), syscalls::SBRK_FAILED);
    assert_eq!(r.errno(), Errno::ENOMEM);

    // File round trip through the filesystem backend.
    let mut r = Reent::new();
    let fd = syscalls::open(
        &mut r,
        c"/data/boot.cfg",
        OpenFlags::RDWR | OpenFlags::CREAT,
        0o644,
    );
    assert_eq!(fd, 3);

    assert_eq!(syscalls::write(&mut r, fd, b"console=uart0"), 13);
    assert_eq!(syscalls::lseek(&mut r, fd, 0, SeekWhence::Set), 0);

    let mut buf = [0u8; 32];
    let n = syscalls::read(&mut r, fd, &mut buf);
    assert_eq!(n, 13);
    assert_eq!(&buf[..13], b"console=uart0");

    let mut st = Stat::zeroed();
    assert_eq!(syscalls::fstat(&mut r, fd, &mut st), 0);
    assert_eq!(st.st_size, 13);
    assert_eq!(syscalls::fcntl(&mut r, fd, 3, 0), 0);
    assert_eq!(syscalls::close(&mut r, fd), 0);

    assert_eq!(syscalls::stat(&mut r, c"/data/boot.cfg", &mut st), 0);
    assert_eq!(syscalls::unlink(&mut r, c"/data/boot.cfg"), 0);

    let missing = syscalls::open(&mut r, c"/data/other.cfg", OpenFlags::RDONLY, 0);
    assert_eq!(missing, -1);
    assert_eq!(r.errno(), Errno::ENOENT);

    // Identity and signals through the registered collaborators.
    assert_eq!(syscalls::getpid(), 7);
    let mut r = Reent::new();
    assert_eq!(syscalls::kill(&mut r, 1, 15), 0);
    assert_eq!(syscalls::kill(&mut r, 99, 15), -1);
    assert_eq!(r.errno(), Errno::ESRCH);

    // Clock is wired: microseconds split into seconds + residue.
    let mut tv = Timeval::default();
    assert_eq!(syscalls::gettimeofday(&mut r, &mut tv), 0);
    assert_eq!(tv.tv_sec, 5002);
    assert_eq!(tv.tv_usec, 123);
}
