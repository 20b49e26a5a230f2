//! `clirun start`, `clirun end` and `clirun wait` commands.

use crate::context::ServiceContext;

/// Execute the `start` command.
pub fn start(ctx: &ServiceContext, label: &str) {
    ctx.reporter().start(label);
}

/// Execute the `end` command.
///
/// # Errors
///
/// Returns an error string if `outcome` is not one of `success`, `skipped`,
/// `failure`.
pub fn end(ctx: &ServiceContext, label: &str, outcome: &str) -> Result<(), String> {
    ctx.reporter().end_with(label, outcome).map_err(|e| e.to_string())
}

/// Execute the `wait` command.
pub fn wait(ctx: &ServiceContext, seconds: u64) {
    ctx.reporter().wait(seconds);
}
