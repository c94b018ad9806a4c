//! Nesting depth shared by every record a logger emits.
//!
//! The counter is an explicit field of the logger, not module state, and is
//! guarded by a mutex: log calls read the depth exactly once, so the pad
//! width of any single line reflects one consistent value.

use std::sync::Mutex;

/// Mutable nesting counter bounded to `[0, max]`.
#[derive(Debug)]
pub(crate) struct IndentState {
    depth: Mutex<usize>,
    max: usize,
}

impl IndentState {
    pub(crate) fn new(max: usize) -> Self {
        Self {
            depth: Mutex::new(0),
            max,
        }
    }

    /// Increment the depth, saturating at the configured maximum.
    pub(crate) fn increase(&self) {
        if let Ok(mut depth) = self.depth.lock() {
            *depth = (*depth + 1).min(self.max);
        }
    }

    /// Decrement the depth, saturating at zero.
    pub(crate) fn decrease(&self) {
        if let Ok(mut depth) = self.depth.lock() {
            *depth = depth.saturating_sub(1);
        }
    }

    /// Current depth. A poisoned lock reads as no indentation rather than
    /// failing the log call.
    pub(crate) fn depth(&self) -> usize {
        self.depth.lock().map(|depth| *depth).unwrap_or(0)
    }
}
