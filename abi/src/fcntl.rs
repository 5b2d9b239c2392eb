//! Open flags and seek modes, newlib numbering.

use core::ffi::c_int;

use bitflags::bitflags;

bitflags! {
    /// Flags accepted by `open`, forwarded to the filesystem collaborator
    /// unchanged. Bits this crate does not name are retained so a platform
    /// extension's private flags survive the boundary.
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct OpenFlags: u32 {
        const WRONLY = 0x0001;
        const RDWR = 0x0002;
        const APPEND = 0x0008;
        const CREAT = 0x0200;
        const TRUNC = 0x0400;
        const EXCL = 0x0800;
        const SYNC = 0x2000;
        const NONBLOCK = 0x4000;

        const _ = !0;
    }
}

impl OpenFlags {
    /// Read-only access, the all-bits-clear mode.
    pub const RDONLY: Self = Self::empty();
}

/// Seek anchor for `lseek`, see man 3p lseek.
#[repr(i32)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeekWhence {
    /// Absolute offset.
    Set = 0,
    /// Relative to the current position.
    Current = 1,
    /// Relative to end of file.
    End = 2,
}

impl SeekWhence {
    #[inline]
    pub const fn as_c_int(self) -> c_int {
        self as c_int
    }

    pub const fn from_c_int(val: c_int) -> Option<Self> {
        match val {
            0 => Some(Self::Set),
            1 => Some(Self::Current),
            2 => Some(Self::End),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rdonly_is_empty() {
        assert_eq!(OpenFlags::RDONLY.bits(), 0);
    }

    #[test]
    fn unknown_bits_are_retained() {
        let raw = 0x0200_0000 | OpenFlags::CREAT.bits();
        let flags = OpenFlags::from_bits_retain(raw);
        assert_eq!(flags.bits(), raw);
        assert!(flags.contains(OpenFlags::CREAT));
    }

    #[test]
    fn whence_round_trip() {
        assert_eq!(SeekWhence::from_c_int(2), Some(SeekWhence::End));
        assert_eq!(SeekWhence::from_c_int(3), None);
        assert_eq!(SeekWhence::Current.as_c_int(), 1);
    }
}
