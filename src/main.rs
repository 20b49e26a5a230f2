//! Binary entrypoint for the `clirun` CLI.

use std::process::ExitCode;

use clirun::config::Settings;

fn main() -> ExitCode {
    // Recording and replay are selected via CLIRUN_RECORD / CLIRUN_REPLAY.
    let settings = Settings::from_env();
    clirun::init_tracing(&settings.log_filter);

    match clirun::run(std::env::args(), &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
