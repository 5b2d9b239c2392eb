//! Runtime support for the krt bridge crates: single-registration service
//! cells, init-once flags, the irq-safe mutex guarding the heap cursor,
//! and a `log` backend that writes through the platform character stream.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod init_flag;
pub mod irq;
pub mod irq_mutex;
pub mod logger;
pub mod service_cell;
pub mod stream;

pub use init_flag::InitFlag;
pub use irq_mutex::{IrqMutex, IrqMutexGuard};
pub use service_cell::ServiceCell;
