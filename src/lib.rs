//! Core library entry for the `clirun` CLI.
//!
//! [`runner::CommandRunner`] runs a command line through the host shell and
//! decodes its output; [`report::ActionReporter`] prints the start/end status
//! lines provisioning scripts wrap around each step.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod report;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::RunError;
pub use report::{ActionReporter, Outcome};
pub use runner::{CommandResult, CommandRunner};

use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::Settings;

/// Run the CLI with the provided arguments and settings.
///
/// Help and version requests are printed and count as success.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I, settings: &Settings) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command, settings)
}

/// Install the stderr diagnostics subscriber.
///
/// An invalid filter directive falls back to `warn`. Calling this twice is
/// harmless; the first subscriber stays installed.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::config::Settings;

    #[test]
    fn run_executes_end() {
        let result = run(["clirun", "end", "Create workspace", "skipped"], &Settings::default());
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_invalid_outcome() {
        let err = run(["clirun", "end", "Create workspace", "bogus"], &Settings::default())
            .unwrap_err();
        assert!(err.contains("bogus"));
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["clirun", "unknown"], &Settings::default());
        assert!(result.is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(run(["clirun", "--help"], &Settings::default()).is_ok());
    }
}
