//! `nuzzle-gen` binary entry point.
use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;

use nuzzle_gen::cli::{self, Cli};
use nuzzle_gen::error::NuzzleError;
use nuzzle_gen::generate;
use nuzzle_gen::logging::{self, Logger};
use nuzzle_gen::platform::Environment;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();

    match generate::run(&args, &Environment::detect(), &log) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let show_usage = matches!(&e, NuzzleError::Request(r) if r.is_usage());
            log.error(&format!("{:#}", anyhow::Error::from(e)));
            if show_usage {
                // Usage bypasses the log filter so it is never silenced.
                let _ = writeln!(std::io::stderr(), "{}", cli::usage());
            }
            ExitCode::FAILURE
        }
    }
}
