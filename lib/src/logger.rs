//! `log` backend that writes through the platform character stream.
//!
//! Formats each record into a stack buffer (no allocator this early) and
//! hands the bytes to the registered [`CharStream`]. Records arriving
//! before a stream is registered are dropped.

use core::fmt::{self, Write};

use log::{LevelFilter, Metadata, Record};

use crate::stream;

const LINE_MAX: usize = 256;

struct StreamLogger;

static LOGGER: StreamLogger = StreamLogger;

/// Truncating formatter over a fixed stack buffer.
struct LineBuffer {
    buf: [u8; LINE_MAX],
    len: usize,
}

impl LineBuffer {
    const fn new() -> Self {
        Self {
            buf: [0; LINE_MAX],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = LINE_MAX - self.len;
        let take = s.len().min(remaining);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

impl log::Log for StreamLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(sink) = stream::try_char_stream() else {
            return;
        };

        let mut line = LineBuffer::new();
        let _ = write!(line, "[{:5}] {}\n", record.level(), record.args());
        let _ = sink.write(line.as_bytes());
    }

    fn flush(&self) {}
}

/// Install the stream logger. Safe to call more than once; the first call
/// wins and later calls only adjust the level filter.
pub fn logger_init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
