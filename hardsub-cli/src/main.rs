//! Main entry point for the Hardsub CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the appropriate command handlers. Stream selection, strategy resolution,
//! and engine invocation live in the hardsub-core library; this binary is the
//! thin terminal layer on top of it.

mod cli;
mod commands;
mod error;
mod logging;
mod terminal;

use clap::Parser;
use std::process;

use crate::cli::{Cli, Commands};

fn main() {
    let cli_args = Cli::parse();

    logging::init(cli_args.verbose);

    let result = match cli_args.command {
        Commands::Transcode(args) => commands::transcode::run_transcode(args),
        Commands::Probe(args) => commands::probe::run_probe(args).map(|()| true),
    };

    match result {
        Ok(clean) => {
            if !clean {
                // Failures were already reported in the batch summary
                process::exit(1);
            }
        }
        Err(e) => {
            terminal::print_error("Error", &e.to_string(), None);
            process::exit(1);
        }
    }
}
