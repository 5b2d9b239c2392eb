//! Mutex that suppresses interrupts while held.
//!
//! Needed for state touched from both thread and interrupt context, such
//! as the heap allocation cursor. The critical section is spin-free at
//! interrupt level: interrupts are disabled first, then the short spin
//! acquires against other cores. Never a sleeping lock.

use core::ops::{Deref, DerefMut};

use crate::irq::IrqGuard;

pub struct IrqMutex<T> {
    inner: spin::Mutex<T>,
}

pub struct IrqMutexGuard<'a, T> {
    inner: spin::MutexGuard<'a, T>,
    // Held for its Drop; restores the interrupt state after the spin
    // guard releases.
    _irq: IrqGuard,
}

impl<T> IrqMutex<T> {
    #[inline]
    pub const fn new(data: T) -> Self {
        Self {
            inner: spin::Mutex::new(data),
        }
    }

    #[inline]
    pub fn lock(&self) -> IrqMutexGuard<'_, T> {
        let irq = IrqGuard::enter();
        let inner = self.inner.lock();
        IrqMutexGuard { inner, _irq: irq }
    }

    #[inline]
    pub fn try_lock(&self) -> Option<IrqMutexGuard<'_, T>> {
        let irq = IrqGuard::enter();
        self.inner
            .try_lock()
            .map(|inner| IrqMutexGuard { inner, _irq: irq })
    }
}

impl<'a, T> Deref for IrqMutexGuard<'a, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<'a, T> DerefMut for IrqMutexGuard<'a, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn exclusive_increment() {
        static COUNTER: IrqMutex<u64> = IrqMutex::new(0);
        static DONE: AtomicU32 = AtomicU32::new(0);

        let threads: std::vec::Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..1000 {
                        *COUNTER.lock() += 1;
                    }
                    DONE.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(DONE.load(Ordering::SeqCst), 4);
        assert_eq!(*COUNTER.lock(), 4000);
    }

    #[test]
    fn try_lock_fails_while_held() {
        let mutex = IrqMutex::new(7);
        let guard = mutex.lock();
        assert!(mutex.try_lock().is_none());
        drop(guard);
        assert_eq!(*mutex.try_lock().unwrap(), 7);
    }
}
