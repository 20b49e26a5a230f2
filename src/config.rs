//! Environment-driven settings for the `clirun` binary.

use std::path::PathBuf;

/// Records shell interactions to the cassette at this path.
pub const RECORD_VAR: &str = "CLIRUN_RECORD";
/// Replays shell interactions from the cassette at this path.
pub const REPLAY_VAR: &str = "CLIRUN_REPLAY";
/// `tracing` filter directive for diagnostics on stderr.
pub const LOG_VAR: &str = "CLIRUN_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Where shell interactions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMode {
    /// Spawn real processes.
    Live,
    /// Spawn real processes and record them to a cassette.
    Record(PathBuf),
    /// Serve results from a recorded cassette.
    Replay(PathBuf),
}

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Shell mode selected by `CLIRUN_RECORD` / `CLIRUN_REPLAY`.
    pub shell_mode: ShellMode,
    /// Diagnostics filter directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { shell_mode: ShellMode::Live, log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first; variables
    /// already set in the environment take precedence over it.
    #[must_use]
    pub fn from_env() -> Self {
        // Missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Replay wins over record when both are set.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let shell_mode = match (get(REPLAY_VAR), get(RECORD_VAR)) {
            (Some(path), _) => ShellMode::Replay(PathBuf::from(path)),
            (None, Some(path)) => ShellMode::Record(PathBuf::from(path)),
            (None, None) => ShellMode::Live,
        };
        let log_filter = get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { shell_mode, log_filter }
    }
}
