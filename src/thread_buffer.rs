//! Per-thread scratch buffer for message assembly.
//!
//! Each thread lazily gets one `String` with [`INITIAL_CAPACITY`] bytes
//! reserved. The buffer is lent out cleared, and put back afterwards, so
//! repeated log calls on a thread reuse the same allocation.
//!
//! The slot is emptied while the buffer is on loan. A nested borrow on the
//! same thread (a `Display` impl or a sink that logs again) finds the slot
//! empty and works on a fresh buffer instead.

use std::cell::Cell;

use log::trace;

use crate::LOG_TARGET;

pub const INITIAL_CAPACITY: usize = 256;

thread_local! {
    static BUFFER: Cell<Option<String>> = const { Cell::new(None) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    /// Never used on this thread, or released.
    Absent,
    /// Allocated and empty.
    Clean,
    /// Holds the previous message.
    Dirty,
}

/// Lend the current thread's buffer, truncated to zero length, to `f`.
pub fn with_buffer<R>(f: impl FnOnce(&mut String) -> R) -> R {
    let mut buffer = BUFFER
        .with(Cell::take)
        .unwrap_or_else(|| String::with_capacity(INITIAL_CAPACITY));
    buffer.clear();

    let result = f(&mut buffer);

    BUFFER.with(|slot| {
        // keep a buffer parked by a nested call rather than ours
        let parked = slot.take();
        slot.set(parked.or(Some(buffer)));
    });
    result
}

/// Release the current thread's buffer. The next use allocates a new one.
pub fn cleanup_thread_local() {
    if let Some(buffer) = BUFFER.with(Cell::take) {
        trace!(
            target: LOG_TARGET,
            "released thread buffer ({} bytes reserved)",
            buffer.capacity()
        );
    }
}

pub fn state() -> BufferState {
    BUFFER.with(|slot| {
        let buffer = slot.take();
        let state = match &buffer {
            None => BufferState::Absent,
            Some(b) if b.is_empty() => BufferState::Clean,
            Some(_) => BufferState::Dirty,
        };
        slot.set(buffer);
        state
    })
}

/// Reserved capacity of the current thread's buffer, if one is present.
pub fn capacity() -> Option<usize> {
    BUFFER.with(|slot| {
        let buffer = slot.take();
        let capacity = buffer.as_ref().map(String::capacity);
        slot.set(buffer);
        capacity
    })
}
