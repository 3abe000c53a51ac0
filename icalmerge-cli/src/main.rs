//! icalmerge
//!
//! Usage:
//!   icalmerge input.json [input.json ...] output.json
//!
//! Later inputs override earlier ones only where an event's LAST-MODIFIED
//! time is strictly newer.

use std::process::ExitCode;

use clap::Parser;
use icalmerge_cli::{run, Args};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(err.exit_status())
        }
    }
}
