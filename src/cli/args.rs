//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for tick.

use clap::{ArgAction, Parser, ValueEnum};

use crate::cli::validate::{parse_seconds, Seconds};
use crate::ticker::DisplayMode;

/// Print the current time once per second for the given number of seconds.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tick",
    version,
    about,
    // "-3" must reach the validator instead of failing as an unknown flag
    allow_negative_numbers = true
)]
pub struct Args {
    /// Number of seconds (it must be a positive integer)
    #[arg(value_name = "SECONDS", value_parser = parse_seconds)]
    pub seconds: Seconds,

    /// Enable "clear" mode to overwrite output on the same line
    #[arg(short = 'c', long = "clear", action = ArgAction::SetTrue)]
    pub clear: bool,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Diagnostics on stderr. Use -vv for debug, -vvv for trace
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format for diagnostics: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,

    /// Show full error details on failure
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

impl Args {
    pub fn display_mode(&self) -> DisplayMode {
        if self.clear {
            DisplayMode::Clear
        } else {
            DisplayMode::Normal
        }
    }
}

/// Log format for diagnostics
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
