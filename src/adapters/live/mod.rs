//! Live adapters for real external interactions.

pub mod console;
pub mod shell;

pub use console::LiveConsole;
pub use shell::LiveShellExecutor;
