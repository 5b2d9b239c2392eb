//! krt C-runtime ABI types
//!
//! This crate provides the canonical definitions for everything shared
//! between the C runtime's system-call surface and the platform that backs
//! it: error codes, open/seek flags, the stat and timeval structures, the
//! reentrant call context, and the collaborator trait interfaces the
//! platform implements. Having a single dependency-free source of truth
//! keeps the bridge crates (`krt-mm`, `krt-sys`) free of cycles and lets
//! the platform register its implementations at bring-up.
//!
//! Wire-visible types are `#[repr(C)]` for ABI stability.

#![no_std]
#![forbid(unsafe_code)]

pub mod errno;
pub mod fcntl;
pub mod platform;
pub mod reent;
pub mod stat;

pub use errno::*;
pub use fcntl::*;
pub use platform::*;
pub use reent::*;
pub use stat::*;

use core::ffi::c_int;

/// Standard input descriptor, terminal-like in every backend.
pub const STDIN_FILENO: c_int = 0;
/// Standard output descriptor, terminal-like in every backend.
pub const STDOUT_FILENO: c_int = 1;
/// Standard error descriptor, terminal-like in every backend.
pub const STDERR_FILENO: c_int = 2;
