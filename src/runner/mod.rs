//! Command runner: executes a command line and normalizes its output.

pub mod decode;

pub use decode::{classify, decode, CommandResult, DecodePolicy, COLOR_RESET};

use crate::error::RunError;
use crate::ports::shell::ShellExecutor;

/// Runs external commands through a [`ShellExecutor`] and decodes their output.
///
/// Holds no state besides the executor: every call spawns exactly one
/// process, with no retries, caching or timeout.
pub struct CommandRunner<'a> {
    shell: &'a dyn ShellExecutor,
}

impl<'a> CommandRunner<'a> {
    /// Creates a runner backed by the given executor.
    #[must_use]
    pub fn new(shell: &'a dyn ShellExecutor) -> Self {
        Self { shell }
    }

    /// Runs `command` through the shell and decodes its standard output.
    ///
    /// The command string is passed to the shell as-is; callers are
    /// responsible for quoting interpolated values.
    ///
    /// # Errors
    ///
    /// - [`RunError::CommandFailure`] if the process exits non-zero, carrying
    ///   its standard error verbatim.
    /// - [`RunError::DecodeFailure`] if structured output does not parse.
    /// - [`RunError::Spawn`] if the shell cannot be started.
    pub fn run(&self, command: &str) -> Result<CommandResult, RunError> {
        let output = self.shell.run(command).map_err(|e| RunError::Spawn(e.to_string()))?;
        if !output.success() {
            return Err(RunError::CommandFailure { status: output.exit_code, stderr: output.stderr });
        }
        decode(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveShellExecutor;
    use crate::adapters::replaying::ReplayingShellExecutor;
    use crate::cassette::{Cassette, CassetteReplayer, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn replaying(outputs: Vec<serde_json::Value>) -> ReplayingShellExecutor {
        let interactions = outputs
            .into_iter()
            .zip(0..)
            .map(|(output, seq)| Interaction {
                seq,
                port: "shell".into(),
                method: "run".into(),
                input: json!({}),
                output,
            })
            .collect();
        let cassette =
            Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions };
        ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))
    }

    fn ok(stdout: &str) -> serde_json::Value {
        json!({"ok": {"exit_code": 0, "stdout": stdout, "stderr": ""}})
    }

    #[test]
    fn trims_plain_text() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        assert_eq!(runner.run("printf '  hello  '").unwrap(), CommandResult::Text("hello".into()));
    }

    #[test]
    fn decodes_json_list_from_live_process() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        let result = runner.run(r#"echo '["a","b"]'"#).unwrap();
        assert_eq!(result, CommandResult::List(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn strips_color_reset_from_live_output() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        let result = runner.run(r#"printf '{"x":1}\033[0m'"#).unwrap();
        assert_eq!(result.as_mapping().unwrap()["x"], json!(1));
    }

    #[test]
    fn unquotes_scalar_reply() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        assert_eq!(runner.run(r#"echo '"single-value"'"#).unwrap().as_text(), Some("single-value"));
    }

    #[test]
    fn nonzero_exit_carries_stderr_verbatim() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        let err = runner.run("echo partial; printf 'not found' >&2; exit 3").unwrap_err();
        match err {
            RunError::CommandFailure { status, stderr } => {
                assert_eq!(status, 3);
                assert_eq!(stderr, "not found");
            }
            other => panic!("expected CommandFailure, got {other:?}"),
        }
    }

    #[test]
    fn stderr_on_success_is_ignored() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        let result = runner.run("echo warning >&2; echo done").unwrap();
        assert_eq!(result.as_text(), Some("done"));
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        let shell = replaying(vec![ok("{\"x\":")]);
        let runner = CommandRunner::new(&shell);
        assert!(matches!(runner.run("az thing show"), Err(RunError::DecodeFailure { .. })));
    }

    #[test]
    fn executor_error_is_a_spawn_failure() {
        let shell = replaying(vec![json!({"err": "No such file or directory"})]);
        let runner = CommandRunner::new(&shell);
        let err = runner.run("az group list").unwrap_err();
        assert!(matches!(err, RunError::Spawn(ref msg) if msg.contains("No such file")));
    }

    #[test]
    fn repeated_runs_yield_identical_results() {
        let shell = LiveShellExecutor;
        let runner = CommandRunner::new(&shell);
        let command = r#"echo '{"name":"rg","location":"westeurope"}'"#;
        assert_eq!(runner.run(command).unwrap(), runner.run(command).unwrap());
    }
}
