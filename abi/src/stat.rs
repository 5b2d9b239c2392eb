//! File status and time-of-day structures.

/// Regular file bit in `st_mode`.
pub const S_IFREG: u32 = 0x8000;
/// Directory bit in `st_mode`.
pub const S_IFDIR: u32 = 0x4000;
/// Character device bit in `st_mode`.
pub const S_IFCHR: u32 = 0x2000;

/// File status record filled by the filesystem collaborator.
///
/// Layout mirrors the C runtime's `struct stat` closely enough for the
/// fields the bridge forwards; the shim itself never reads any of them.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Stat {
    pub st_dev: u64,
    pub st_ino: u64,
    pub st_mode: u32,
    pub st_nlink: u32,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: u64,
    pub st_size: i64,
    pub st_atime: i64,
    pub st_mtime: i64,
    pub st_ctime: i64,
    pub st_blksize: i32,
    pub st_blocks: i64,
}

impl Stat {
    pub const fn zeroed() -> Self {
        Self {
            st_dev: 0,
            st_ino: 0,
            st_mode: 0,
            st_nlink: 0,
            st_uid: 0,
            st_gid: 0,
            st_rdev: 0,
            st_size: 0,
            st_atime: 0,
            st_mtime: 0,
            st_ctime: 0,
            st_blksize: 0,
            st_blocks: 0,
        }
    }
}

/// Microseconds per second, for splitting the monotonic clock value.
pub const US_PER_SEC: u64 = 1_000_000;

/// Seconds plus residual microseconds, as filled by `gettimeofday`.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Timeval {
    pub tv_sec: i64,
    pub tv_usec: i64,
}
