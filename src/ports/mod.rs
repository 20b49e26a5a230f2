//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the runner core and an
//! external system (the host shell, the user's terminal).
//! Implementations live in `src/adapters/`.

pub mod console;
pub mod shell;

pub use console::Console;
pub use shell::{ShellExecutor, ShellOutput};
