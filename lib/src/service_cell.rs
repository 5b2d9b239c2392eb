//! Generic collaborator registration cell.
//!
//! Eliminates the duplicated `Once` boilerplate around each platform
//! collaborator. Registration happens exactly once, during bring-up;
//! afterwards the cell hands out the `'static` reference forever.

use spin::Once;

/// A cell holding one registered `&'static` collaborator.
///
/// `T: ?Sized` so cells can hold trait objects directly.
pub struct ServiceCell<T: ?Sized + 'static> {
    slot: Once<&'static T>,
    name: &'static str,
}

impl<T: ?Sized> ServiceCell<T> {
    /// Create an empty cell. `name` appears in panic messages.
    pub const fn new(name: &'static str) -> Self {
        Self {
            slot: Once::new(),
            name,
        }
    }

    /// Register the collaborator. Panics if already registered; wiring the
    /// same seam twice is a bring-up bug, never a recoverable condition.
    pub fn register(&self, service: &'static T) {
        assert!(
            !self.slot.is_completed(),
            "{} already registered",
            self.name
        );
        self.slot.call_once(|| service);
    }

    #[inline]
    pub fn is_registered(&self) -> bool {
        self.slot.is_completed()
    }

    /// Get the collaborator. Panics if nothing was registered.
    #[inline]
    pub fn get(&self) -> &'static T {
        match self.slot.get() {
            Some(service) => service,
            None => panic!("{} not registered", self.name),
        }
    }

    /// Get the collaborator, or `None` when the seam is unwired.
    #[inline]
    pub fn try_get(&self) -> Option<&'static T> {
        self.slot.get().copied()
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}
