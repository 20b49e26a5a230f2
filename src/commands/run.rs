//! `clirun run` command.

use crate::context::ServiceContext;
use crate::error::RunError;
use crate::ports::console::Console;
use crate::runner::CommandResult;

/// Execute the `run` command.
///
/// Text results are printed as-is; lists and mappings are printed as JSON.
/// With a `label`, the run is wrapped in start/end status lines.
///
/// # Errors
///
/// Returns the command's captured standard error when it exits non-zero,
/// or a description of the decode or spawn failure.
pub fn run_with_context(
    ctx: &ServiceContext,
    command: &str,
    label: Option<&str>,
    pretty: bool,
) -> Result<(), String> {
    let runner = ctx.runner();
    let result = match label {
        Some(label) => ctx.reporter().track(label, || runner.run(command)),
        None => runner.run(command),
    };

    match result {
        Ok(value) => {
            ctx.console.write(&format!("{}\n", render(&value, pretty)?));
            Ok(())
        }
        Err(e) => Err(failure_message(&e)),
    }
}

/// The captured stderr for a failed command, the error description otherwise.
fn failure_message(err: &RunError) -> String {
    err.stderr().map_or_else(|| err.to_string(), |stderr| stderr.trim_end().to_string())
}

fn render(value: &CommandResult, pretty: bool) -> Result<String, String> {
    let rendered = match value {
        CommandResult::Text(text) => return Ok(text.clone()),
        _ if pretty => serde_json::to_string_pretty(value),
        _ => serde_json::to_string(value),
    };
    rendered.map_err(|e| format!("Failed to render output: {e}"))
}
