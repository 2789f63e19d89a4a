//! # ssmuse CLI
//!
//! This is the binary entry point for the `ssmuse` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the driver and printing the generated script (or the path of
//!   the self-deleting script file) on standard output.
//! - Reporting failures on standard error only, since standard output is
//!   evaluated by the calling shell.
//!
//! Every failure, including usage errors detected by `clap`, exits with
//! status 1.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use ssmuse::defaults::LOG_VAR;
use ssmuse::error::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_VAR, "warn"))
        .format_timestamp(None)
        .init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Error>() {
                Some(e) if e.is_fatal() => eprintln!("fatal: {}", e),
                Some(e) => eprintln!("abort: unrecoverable error ({})", e),
                None => eprintln!("abort: unrecoverable error ({:#})", err),
            }
            ExitCode::FAILURE
        }
    }
}
