//! Command dispatch and handlers.

pub mod action;
pub mod run;

use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// `CLIRUN_RECORD` / `CLIRUN_REPLAY` in `settings` select how shell
/// interactions are served; a recorded cassette is written once the
/// command completes, even when it failed.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the selected
/// command handler fails.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    tracing::debug!(mode = ?settings.shell_mode, "building service context");
    let mut ctx = ServiceContext::for_mode(&settings.shell_mode)?;

    let result = dispatch_with_context(command, &ctx);

    let saved = ctx.finish();
    if let Ok(Some(path)) = &saved {
        eprintln!("Recording saved to: {}", path.display());
    }

    // The command's own error comes first so its stderr is never hidden.
    match (result, saved) {
        (Err(err), Err(save_err)) => Err(format!("{err}\n{save_err}")),
        (Err(err), Ok(_)) => Err(err),
        (Ok(()), Err(save_err)) => Err(save_err),
        (Ok(()), Ok(_)) => Ok(()),
    }
}

/// Dispatch a command with the given service context.
pub(crate) fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    tracing::debug!(?command, "dispatching");
    match command {
        Command::Run { command, label, pretty } => {
            run::run_with_context(ctx, command, label.as_deref(), *pretty)
        }
        Command::Start { label } => {
            action::start(ctx, label);
            Ok(())
        }
        Command::End { label, outcome } => action::end(ctx, label, outcome),
        Command::Wait { seconds } => {
            action::wait(ctx, *seconds);
            Ok(())
        }
    }
}
