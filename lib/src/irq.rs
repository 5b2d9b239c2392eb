//! Registration point for the platform's interrupt-disable primitive.
//!
//! When no [`IrqControl`] is registered (early boot, host tests) the
//! guard degrades to a no-op and mutual exclusion falls back to the spin
//! lock alone.

use krt_abi::IrqControl;

use crate::service_cell::ServiceCell;

static IRQ_CONTROL: ServiceCell<dyn IrqControl> = ServiceCell::new("irq control");

pub fn register_irq_control(ctl: &'static dyn IrqControl) {
    IRQ_CONTROL.register(ctl);
}

pub fn is_irq_control_registered() -> bool {
    IRQ_CONTROL.is_registered()
}

/// Scoped critical section: suppresses interruption on construction and
/// restores the saved state on drop, on every exit path.
pub struct IrqGuard {
    saved: Option<(&'static dyn IrqControl, usize)>,
}

impl IrqGuard {
    #[inline]
    pub fn enter() -> Self {
        let saved = IRQ_CONTROL.try_get().map(|ctl| (ctl, ctl.disable()));
        Self { saved }
    }
}

impl Drop for IrqGuard {
    #[inline]
    fn drop(&mut self) {
        if let Some((ctl, state)) = self.saved.take() {
            ctl.restore(state);
        }
    }
}
