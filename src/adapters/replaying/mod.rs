//! Replaying adapters that replay recorded interactions.

pub mod shell;

pub use shell::ReplayingShellExecutor;
