//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveConsole, LiveShellExecutor};
use crate::adapters::recording::RecordingShellExecutor;
use crate::adapters::replaying::ReplayingShellExecutor;
use crate::cassette::{Cassette, CassetteRecorder, CassetteReplayer};
use crate::config::ShellMode;
use crate::ports::console::Console;
use crate::ports::shell::ShellExecutor;
use crate::report::ActionReporter;
use crate::runner::CommandRunner;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different shell adapters (live, recording,
/// replaying); the console is always the caller's choice.
pub struct ServiceContext {
    /// Shell executor for running commands.
    pub shell: Box<dyn ShellExecutor>,
    /// Console for status lines.
    pub console: Box<dyn Console>,
    /// Recorder shared with the recording shell adapter; saved on finish or drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context that spawns real processes and prints to stdout.
    #[must_use]
    pub fn live() -> Self {
        Self { shell: Box::new(LiveShellExecutor), console: Box::new(LiveConsole), recorder: None }
    }

    /// Creates a recording context that writes a cassette to `path`.
    ///
    /// Commands still run for real. An existing cassette at `path` is
    /// appended to. The cassette is written by [`ServiceContext::finish`],
    /// or on drop if `finish` was never called.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing cassette at `path` cannot be loaded.
    pub fn recording(path: &Path) -> Result<Self, String> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map_or_else(|| "clirun-session".to_string(), str::to_string);
        let recorder = Arc::new(Mutex::new(CassetteRecorder::open(path, name, commit_hash())?));
        let shell = RecordingShellExecutor::new(Box::new(LiveShellExecutor), Arc::clone(&recorder));
        Ok(Self { shell: Box::new(shell), console: Box::new(LiveConsole), recorder: Some(recorder) })
    }

    /// Creates a replaying context serving shell results from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Creates a replaying context from an already loaded cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        Self {
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(cassette))),
            console: Box::new(LiveConsole),
            recorder: None,
        }
    }

    /// Creates the context selected by `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay or existing record cassette cannot be loaded.
    pub fn for_mode(mode: &ShellMode) -> Result<Self, String> {
        match mode {
            ShellMode::Live => Ok(Self::live()),
            ShellMode::Record(path) => Self::recording(path),
            ShellMode::Replay(path) => Self::replaying(path),
        }
    }

    /// Replaces the console, e.g. with a buffering one in tests.
    #[must_use]
    pub fn with_console(mut self, console: Box<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// A command runner over this context's shell.
    #[must_use]
    pub fn runner(&self) -> CommandRunner<'_> {
        CommandRunner::new(self.shell.as_ref())
    }

    /// An action reporter over this context's console.
    #[must_use]
    pub fn reporter(&self) -> ActionReporter<'_> {
        ActionReporter::new(self.console.as_ref())
    }

    /// Writes the recorded cassette, if this is a recording context.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(&mut self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder.take() else {
            return Ok(None);
        };
        let guard = recorder.lock().map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        let path = guard.save().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            tracing::warn!("failed to write cassette: {e}");
        }
    }
}

/// Current git commit hash, or "unknown" if unavailable.
fn commit_hash() -> String {
    let shell = LiveShellExecutor;
    match CommandRunner::new(&shell).run("git rev-parse HEAD 2>/dev/null") {
        Ok(result) => result.as_text().unwrap_or("unknown").to_string(),
        Err(e) => {
            tracing::warn!("could not get git commit hash, using 'unknown': {e}");
            "unknown".to_string()
        }
    }
}
