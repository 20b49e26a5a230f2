//! Live console writing to standard output.

use std::io::Write;

use crate::ports::console::Console;

/// Live console that writes to the process's stdout.
pub struct LiveConsole;

impl Console for LiveConsole {
    fn write(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) must not abort the action being reported.
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}
