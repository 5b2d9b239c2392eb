//! System-call shim between the C runtime and the platform.
//!
//! Every file operation follows one fixed pattern: call into the active
//! backend, and if the backend reports a negative symbolic error, write
//! the positive code into the caller's [`krt_abi::Reent`] slot and return
//! the public failure sentinel. The backend is chosen at build time by the
//! `vfs` feature; callers observe no difference beyond capability.

#![no_std]

#[cfg(test)]
extern crate std;

mod backend;
#[cfg(feature = "newlib")]
mod ffi;
pub mod services;
pub mod syscalls;
mod translate;

pub use syscalls::*;
