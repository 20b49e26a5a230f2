//! In-memory adapters used by tests and embedding callers.

pub mod console;

pub use console::BufferConsole;
