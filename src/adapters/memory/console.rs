//! Console adapter that buffers everything written to it.

use std::sync::{Arc, Mutex};

use crate::ports::console::Console;

/// Collects console writes into a string instead of printing them.
///
/// Clones share one buffer, so a caller can keep a handle while a
/// `ServiceContext` owns another.
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    buffer: Arc<Mutex<String>>,
}

impl BufferConsole {
    /// Creates an empty buffer console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    ///
    /// # Panics
    ///
    /// Panics if the buffer lock is poisoned.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.lock().expect("console buffer lock poisoned").clone()
    }
}

impl Console for BufferConsole {
    fn write(&self, text: &str) {
        self.buffer.lock().expect("console buffer lock poisoned").push_str(text);
    }
}
