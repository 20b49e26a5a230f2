//! Error taxonomy for command execution and status reporting.

use thiserror::Error;

/// Errors surfaced by the command runner and the action reporter.
#[derive(Debug, Error)]
pub enum RunError {
    /// The child process exited with a non-zero status.
    #[error("command exited with status {status}: {stderr}")]
    CommandFailure {
        /// Exit status reported by the process (`-1` when killed by a signal).
        status: i32,
        /// Captured standard error, verbatim.
        stderr: String,
    },
    /// Output looked like structured data but did not parse.
    #[error("failed to decode structured command output: {source}")]
    DecodeFailure {
        /// Underlying JSON parse error.
        #[from]
        source: serde_json::Error,
    },
    /// A status outcome outside `success`, `skipped`, `failure`.
    #[error("outcome {0:?} unhandled, expected one of: success, skipped, failure")]
    InvalidOutcome(String),
    /// The shell could not be started or the executor failed before a status was known.
    #[error("failed to execute command: {0}")]
    Spawn(String),
}

impl RunError {
    /// Captured standard error for a `CommandFailure`, `None` otherwise.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailure { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_exposes_stderr() {
        let err = RunError::CommandFailure { status: 3, stderr: "not found".into() };
        assert_eq!(err.stderr(), Some("not found"));
        assert!(err.to_string().contains("status 3"));
    }

    #[test]
    fn invalid_outcome_names_the_value() {
        let err = RunError::InvalidOutcome("bogus".into());
        assert!(err.stderr().is_none());
        assert!(err.to_string().contains("\"bogus\""));
    }
}
