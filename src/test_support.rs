//! Shared fixtures for unit tests.

use chrono::Utc;
use serde_json::json;

use crate::adapters::memory::BufferConsole;
use crate::cassette::{Cassette, Interaction};
use crate::context::ServiceContext;

/// A live context whose console output is captured.
pub(crate) fn buffered_live() -> (ServiceContext, BufferConsole) {
    let console = BufferConsole::new();
    let ctx = ServiceContext::live().with_console(Box::new(console.clone()));
    (ctx, console)
}

/// A replaying context serving the given `(exit_code, stdout, stderr)` results in order.
pub(crate) fn buffered_replay(results: &[(i32, &str, &str)]) -> (ServiceContext, BufferConsole) {
    let interactions = results
        .iter()
        .zip(0..)
        .map(|(&(exit_code, stdout, stderr), seq)| Interaction {
            seq,
            port: "shell".into(),
            method: "run".into(),
            input: json!({}),
            output: json!({"ok": {"exit_code": exit_code, "stdout": stdout, "stderr": stderr}}),
        })
        .collect();
    let cassette =
        Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions };
    let console = BufferConsole::new();
    let ctx = ServiceContext::from_cassette(&cassette).with_console(Box::new(console.clone()));
    (ctx, console)
}
