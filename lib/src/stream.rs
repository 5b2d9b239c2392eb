//! Registration point for the platform character stream.
//!
//! The stream doubles as the logger sink and as the fallback file backend
//! when no filesystem is configured, so it lives here rather than next to
//! the syscall surface.

use krt_abi::CharStream;

use crate::service_cell::ServiceCell;

static CHAR_STREAM: ServiceCell<dyn CharStream> = ServiceCell::new("char stream");

pub fn register_char_stream(stream: &'static dyn CharStream) {
    CHAR_STREAM.register(stream);
}

pub fn is_char_stream_registered() -> bool {
    CHAR_STREAM.is_registered()
}

/// The registered stream. Panics when the platform has not wired one.
#[inline]
pub fn char_stream() -> &'static dyn CharStream {
    CHAR_STREAM.get()
}

#[inline]
pub fn try_char_stream() -> Option<&'static dyn CharStream> {
    CHAR_STREAM.try_get()
}
