//! Start/end status lines around a labelled action.
//!
//! A start line is written without a newline; the matching end line begins
//! with a carriage return so that, on a terminal, it replaces the pending
//! start line with the outcome symbol.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::RunError;
use crate::ports::console::Console;

const PENDING_SYMBOL: &str = "⚪";

/// The closed set of outcomes an action can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The action completed.
    Success,
    /// The action was not needed and did nothing.
    Skipped,
    /// The action failed.
    Failure,
}

impl Outcome {
    /// Status symbol printed in front of the label.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Success => "🟢",
            Self::Skipped => "🔵",
            Self::Failure => "🔴",
        }
    }

    /// Lowercase name, as accepted by [`Outcome::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Skipped => "skipped",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "skipped" => Ok(Self::Skipped),
            "failure" => Ok(Self::Failure),
            other => Err(RunError::InvalidOutcome(other.to_string())),
        }
    }
}

/// Writes paired status lines for actions to a [`Console`].
pub struct ActionReporter<'a> {
    console: &'a dyn Console,
}

impl<'a> ActionReporter<'a> {
    /// Creates a reporter writing to `console`.
    #[must_use]
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }

    /// Writes the pending line for `label`.
    pub fn start(&self, label: &str) {
        self.console.write(&format!("{PENDING_SYMBOL} {label}"));
    }

    /// Writes the final line for `label`.
    pub fn end(&self, label: &str, outcome: Outcome) {
        self.console.write(&format!("\r{} {label}\n", outcome.symbol()));
    }

    /// Like [`ActionReporter::end`], with the outcome given by name.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidOutcome`] for anything other than
    /// `success`, `skipped` or `failure`; nothing is written in that case.
    pub fn end_with(&self, label: &str, outcome: &str) -> Result<(), RunError> {
        let outcome = outcome.parse()?;
        self.end(label, outcome);
        Ok(())
    }

    /// Runs `action` between a start and an end line.
    ///
    /// The end line reports `success` for `Ok` and `failure` for `Err`; the
    /// action's result is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever error `action` returns.
    pub fn track<T, E>(&self, label: &str, action: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.start(label);
        let result = action();
        let outcome = if result.is_ok() { Outcome::Success } else { Outcome::Failure };
        self.end(label, outcome);
        result
    }

    /// Reports a wait of `seconds` seconds and blocks for that long.
    pub fn wait(&self, seconds: u64) {
        let label = format!("Wait for {seconds} seconds");
        self.start(&label);
        std::thread::sleep(Duration::from_secs(seconds));
        self.end(&label, Outcome::Success);
    }
}
