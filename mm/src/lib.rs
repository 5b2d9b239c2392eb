//! Heap bridge for the C runtime's allocator.

#![no_std]

#[cfg(test)]
extern crate std;

mod heap;

pub use heap::{HEAP_PAD, HeapStats, heap_init, heap_stats, sbrk};
