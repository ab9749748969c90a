//! Exit status codes for the CLI
//!
//! tick follows standard Unix exit code conventions:
//! - 0: Success (the loop ran to completion, or --help/--version)
//! - 1: Any error (invalid duration, failed write to stdout)
//! - 130: User interrupted (Ctrl+C, standard SIGINT exit code)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Every tick was printed
    Success = 0,
    /// Argument validation or output failure
    Error = 1,
    /// User interrupted (Ctrl+C) - standard SIGINT code
    Interrupted = 130,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
