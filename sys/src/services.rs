//! Registration points for the collaborators the shim calls into.
//!
//! Platform bring-up wires these before the C runtime runs. The two
//! optional seams (clock, signal delivery) are probed with `try_`
//! accessors; the rest panic when used unwired, since reaching them
//! without a platform is a bring-up bug.

use krt_abi::{MonotonicClock, PowerControl, SchedQuery, SignalDelivery};
#[cfg(feature = "vfs")]
use krt_abi::Vfs;
use krt_lib::ServiceCell;

#[cfg(feature = "vfs")]
static VFS: ServiceCell<dyn Vfs> = ServiceCell::new("vfs");
static CLOCK: ServiceCell<dyn MonotonicClock> = ServiceCell::new("clock");
static POWER: ServiceCell<dyn PowerControl> = ServiceCell::new("power");
static SCHED: ServiceCell<dyn SchedQuery> = ServiceCell::new("sched");
static SIGNAL: ServiceCell<dyn SignalDelivery> = ServiceCell::new("signal");

#[cfg(feature = "vfs")]
pub fn register_vfs(vfs: &'static dyn Vfs) {
    VFS.register(vfs);
}

#[cfg(feature = "vfs")]
#[inline]
pub(crate) fn vfs() -> &'static dyn Vfs {
    VFS.get()
}

pub fn register_clock(clock: &'static dyn MonotonicClock) {
    CLOCK.register(clock);
}

#[inline]
pub(crate) fn try_clock() -> Option<&'static dyn MonotonicClock> {
    CLOCK.try_get()
}

pub fn register_power_control(power: &'static dyn PowerControl) {
    POWER.register(power);
}

#[inline]
pub(crate) fn try_power() -> Option<&'static dyn PowerControl> {
    POWER.try_get()
}

pub fn register_sched_query(sched: &'static dyn SchedQuery) {
    SCHED.register(sched);
}

#[inline]
pub(crate) fn try_sched() -> Option<&'static dyn SchedQuery> {
    SCHED.try_get()
}

pub fn register_signal_delivery(signal: &'static dyn SignalDelivery) {
    SIGNAL.register(signal);
}

#[inline]
pub(crate) fn try_signal() -> Option<&'static dyn SignalDelivery> {
    SIGNAL.try_get()
}
