//! Symbolic error codes shared between the shim and its collaborators.
//!
//! Values follow newlib's errno numbering so the C runtime observes the
//! constants it was compiled against. `Errno` is a transparent newtype
//! rather than an enum: codes the filesystem collaborator reports that
//! this crate has no name for must survive the boundary verbatim.

use core::ffi::c_int;
use core::fmt;

/// A positive errno value, `Errno::OK` (zero) meaning "no error".
///
/// Collaborators report failures as *negative* returns (`-errno`); the
/// error-output slot in [`crate::Reent`] stores the *positive* code. The
/// constructors below keep the two conventions from being mixed up.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Errno(c_int);

impl Errno {
    /// No error recorded.
    pub const OK: Self = Self(0);
    /// Operation not permitted.
    pub const EPERM: Self = Self(1);
    /// No such file or directory.
    pub const ENOENT: Self = Self(2);
    /// No such process.
    pub const ESRCH: Self = Self(3);
    /// I/O error.
    pub const EIO: Self = Self(5);
    /// Bad file descriptor.
    pub const EBADF: Self = Self(9);
    /// Not enough memory.
    pub const ENOMEM: Self = Self(12);
    /// Permission denied.
    pub const EACCES: Self = Self(13);
    /// No such device.
    pub const ENODEV: Self = Self(19);
    /// Invalid argument.
    pub const EINVAL: Self = Self(22);
    /// Function not implemented (newlib numbering).
    pub const ENOSYS: Self = Self(88);

    /// Wrap a raw positive errno value.
    #[inline]
    pub const fn from_c_int(code: c_int) -> Self {
        Self(code)
    }

    /// Translate a collaborator's negative return into the positive code.
    #[inline]
    pub const fn from_neg_return(ret: c_int) -> Self {
        Self(-ret)
    }

    /// The positive errno value for the C runtime's error slot.
    #[inline]
    pub const fn as_c_int(self) -> c_int {
        self.0
    }

    /// The negative return-code form used by collaborator interfaces.
    #[inline]
    pub const fn as_neg_return(self) -> c_int {
        -self.0
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        !self.is_ok()
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::OK => "OK",
            Self::EPERM => "EPERM",
            Self::ENOENT => "ENOENT",
            Self::ESRCH => "ESRCH",
            Self::EIO => "EIO",
            Self::EBADF => "EBADF",
            Self::ENOMEM => "ENOMEM",
            Self::EACCES => "EACCES",
            Self::ENODEV => "ENODEV",
            Self::EINVAL => "EINVAL",
            Self::ENOSYS => "ENOSYS",
            _ => return None,
        })
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "errno {}", self.0),
        }
    }
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Errno({name})"),
            None => write!(f, "Errno({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_return_round_trip() {
        let err = Errno::from_neg_return(-13);
        assert_eq!(err, Errno::EACCES);
        assert_eq!(err.as_c_int(), 13);
        assert_eq!(err.as_neg_return(), -13);
    }

    #[test]
    fn unknown_codes_pass_through_verbatim() {
        let err = Errno::from_neg_return(-1234);
        assert_eq!(err.as_c_int(), 1234);
        assert!(err.is_error());
    }

    #[test]
    fn zero_is_ok() {
        assert!(Errno::OK.is_ok());
        assert!(Errno::default().is_ok());
        assert!(!Errno::ENODEV.is_ok());
    }
}
