//! tick library interface
//!
//! Prints the local wall-clock time once per second for a given duration,
//! either one line per second or overwriting a single line.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and duration validation
//! - [`clock`] - Clock seam and `HH:MM:SS` formatting
//! - [`ticker`] - The print loop
//! - [`core`] - Main execution logic
//! - [`logging`] - tracing subscriber setup
//! - [`signals`] - Interrupt handling (was_interrupted, set_interrupted)
//! - [`errors`] - Error types (TickError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod cli;
pub mod clock;
pub mod core;
pub mod errors;
pub mod logging;
pub mod signals;
pub mod status;
pub mod ticker;
