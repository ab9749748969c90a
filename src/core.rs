use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use crate::cli::Args;
use crate::clock::LocalClock;
use crate::errors::TickError;
use crate::logging;
use crate::signals;
use crate::status::ExitStatus;
use crate::ticker::{ThreadSleeper, TickReport, Ticker};

/// Main entry point for the CLI.
///
/// Parses and validates the whole command line before anything reaches
/// stdout, then runs the print loop against the local clock.
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if let Err(e) = logging::init(parsed.verbose, parsed.log_format) {
        eprintln!("Warning: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match program(&parsed, &mut out) {
        Ok(report) => status_for(&report),
        Err(e) => handle_error(e, parsed.debug),
    }
}

/// Exit status of a loop that ran without errors
fn status_for(report: &TickReport) -> ExitStatus {
    if report.interrupted {
        ExitStatus::Interrupted
    } else {
        ExitStatus::Success
    }
}

/// Run the print loop for already-validated arguments
pub fn program<W: Write>(args: &Args, out: &mut W) -> Result<TickReport, TickError> {
    if args.debug {
        eprintln!("Debug: {:?}", args);
    }

    let sleeper = ThreadSleeper::new(signals::flag());
    let mut ticker = Ticker::new(LocalClock, sleeper);
    ticker.run(out, args.seconds, args.display_mode())
}

fn handle_error(error: TickError, debug: bool) -> ExitStatus {
    debug!(%error, "Aborting");

    if debug {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}
