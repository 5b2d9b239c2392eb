//! One-directional bump allocator over the platform heap region.
//!
//! The C runtime's allocator calls `sbrk` to grow its arena; nothing is
//! ever reclaimed. The region bounds are fixed by `heap_init` during
//! bring-up and the cursor then only moves forward, under an [`IrqMutex`]
//! so growth is atomic with respect to every other thread and to
//! interrupt-level contexts.

use krt_abi::Errno;
use krt_lib::IrqMutex;

/// Bytes reserved at the bottom of the region; the cursor starts at
/// `start + HEAP_PAD`.
pub const HEAP_PAD: usize = 4;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HeapStats {
    pub region_size: usize,
    pub used: usize,
    pub free: usize,
}

struct HeapBridge {
    start: usize,
    end: usize,
    top: usize,
    initialized: bool,
}

impl HeapBridge {
    const fn new() -> Self {
        Self {
            start: 0,
            end: 0,
            top: 0,
            initialized: false,
        }
    }

    fn init(&mut self, start: usize, end: usize) {
        assert!(
            start + HEAP_PAD <= end,
            "heap region too small: {start:#x}..{end:#x}"
        );
        self.start = start;
        self.end = end;
        self.top = start + HEAP_PAD;
        self.initialized = true;
    }

    /// Advance the cursor by `incr` bytes and return its previous value,
    /// the base of the newly granted range. The cursor never moves
    /// backwards; shrink requests fail the bounds check like any other
    /// out-of-range growth.
    fn grow(&mut self, incr: isize) -> Result<usize, Errno> {
        if !self.initialized {
            return Err(Errno::ENOMEM);
        }
        if incr < 0 {
            return Err(Errno::ENOMEM);
        }
        let new_top = self
            .top
            .checked_add(incr as usize)
            .ok_or(Errno::ENOMEM)?;
        if new_top > self.end {
            return Err(Errno::ENOMEM);
        }

        let base = self.top;
        self.top = new_top;
        Ok(base)
    }

    fn stats(&self) -> HeapStats {
        if !self.initialized {
            return HeapStats::default();
        }
        HeapStats {
            region_size: self.end - self.start,
            used: self.top - self.start,
            free: self.end - self.top,
        }
    }
}

static HEAP: IrqMutex<HeapBridge> = IrqMutex::new(HeapBridge::new());

/// Fix the heap region. Called once from platform bring-up, before the C
/// runtime performs its first allocation; calling again re-arms the
/// region and discards the old cursor.
pub fn heap_init(start: usize, end: usize) {
    // Log only after releasing the cursor lock: the stream write can
    // block, and the sink may itself query the heap.
    let top = {
        let mut heap = HEAP.lock();
        heap.init(start, end);
        heap.top
    };
    log::debug!("heap region {start:#x}..{end:#x}, cursor at {top:#x}");
}

/// Grow the heap by `incr` bytes.
///
/// Returns the base address of the granted range. A request that would
/// push the cursor past the region end (or any negative request) fails
/// with `ENOMEM` and leaves the cursor unchanged; a later in-bounds
/// request still succeeds from the same cursor.
pub fn sbrk(incr: isize) -> Result<usize, Errno> {
    HEAP.lock().grow(incr)
}

/// Region/used/free byte counts, for platform diagnostics.
pub fn heap_stats() -> HeapStats {
    HEAP.lock().stats()
}
