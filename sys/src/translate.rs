//! The error-convention boundary.
//!
//! Backends speak negative symbolic codes; the C runtime expects a `-1`
//! sentinel plus a positive code in the reentrant error slot. These
//! helpers are the only place the two conventions meet.

use core::ffi::c_int;

use krt_abi::{Errno, Reent};

/// Translate an int-returning backend result.
#[inline]
pub(crate) fn cvt(r: &mut Reent, res: c_int) -> c_int {
    if res < 0 {
        r.set_errno(Errno::from_neg_return(res));
        return -1;
    }
    res
}

/// Translate a count-returning backend result.
#[inline]
pub(crate) fn cvt_ssize(r: &mut Reent, res: isize) -> isize {
    if res < 0 {
        r.set_errno(Errno::from_neg_return(res as c_int));
        return -1;
    }
    res
}

/// Translate an offset-returning backend result.
#[inline]
pub(crate) fn cvt_off(r: &mut Reent, res: i64) -> i64 {
    if res < 0 {
        r.set_errno(Errno::from_neg_return(res as c_int));
        return -1;
    }
    res
}

/// Translate a stat-like backend result, normalizing success to exactly
/// zero regardless of what non-negative value the backend produced.
#[inline]
pub(crate) fn cvt_stat(r: &mut Reent, res: c_int) -> c_int {
    if res < 0 {
        r.set_errno(Errno::from_neg_return(res));
        return -1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_codes_become_errno_plus_sentinel() {
        let mut r = Reent::new();
        assert_eq!(cvt(&mut r, -13), -1);
        assert_eq!(r.errno(), Errno::EACCES);
    }

    #[test]
    fn non_negative_passes_through_untouched() {
        let mut r = Reent::new();
        assert_eq!(cvt(&mut r, 4), 4);
        assert_eq!(cvt_ssize(&mut r, 0), 0);
        assert_eq!(cvt_off(&mut r, 1 << 33), 1 << 33);
        assert!(r.errno().is_ok());
    }

    #[test]
    fn stat_success_is_normalized_to_zero() {
        let mut r = Reent::new();
        assert_eq!(cvt_stat(&mut r, 7), 0);
        assert!(r.errno().is_ok());
        assert_eq!(cvt_stat(&mut r, -19), -1);
        assert_eq!(r.errno(), Errno::ENODEV);
    }
}
