//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::Interaction;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded shell command results from a cassette.
///
/// Each run is served the earliest unconsumed interaction recorded for the
/// same command text, so separate processes replaying one step each get
/// the right result. Interactions recorded without a command match any
/// command.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

fn recorded_for(interaction: &Interaction, command: &str) -> bool {
    interaction.input.get("command").and_then(serde_json::Value::as_str).is_none_or(|c| c == command)
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = {
            let mut replayer = self.replayer.lock().map_err(|e| e.to_string())?;
            replayer.next_matching("shell", "run", |i| recorded_for(i, command))?.output.clone()
        };
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        let value = output.get("ok").unwrap_or(&output);
        let exit_code = value
            .get("exit_code")
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| format!("Recorded shell run for {command:?} has no integer exit_code"))?;
        let exit_code = i32::try_from(exit_code)
            .map_err(|_| format!("Recorded exit_code {exit_code} for {command:?} is out of range"))?;
        let stdout =
            value.get("stdout").and_then(serde_json::Value::as_str).unwrap_or("").to_string();
        let stderr =
            value.get("stderr").and_then(serde_json::Value::as_str).unwrap_or("").to_string();
        Ok(ShellOutput { exit_code, stdout, stderr })
    }
}
