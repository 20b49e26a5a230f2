//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `clirun`.
#[derive(Debug, Parser)]
#[command(name = "clirun", version, about = "Run CLI tools and normalize their output")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a shell command and print its decoded output.
    Run {
        /// Command line passed to `sh -c`.
        command: String,
        /// Wrap the run in start/end status lines with this label.
        #[arg(long)]
        label: Option<String>,
        /// Pretty-print structured output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the pending status line for an action.
    Start {
        /// Action label.
        label: String,
    },
    /// Print the final status line for an action.
    End {
        /// Action label.
        label: String,
        /// One of: success, skipped, failure.
        #[arg(default_value = "success")]
        outcome: String,
    },
    /// Report a wait and sleep for the given number of seconds.
    Wait {
        /// Seconds to wait.
        seconds: u64,
    },
}
