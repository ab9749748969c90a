//! Common test utilities for tick integration tests
//!
//! Runs the compiled binary and splits its stdout into the individual
//! writes the print loop made.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use assert_cmd::Command;

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
    Interrupted = 130,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            130 => ExitStatus::Interrupted,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
    pub exit_code: i32,
    pub elapsed: Duration,
}

impl CliResponse {
    /// Each timestamp together with the character that ended it
    pub fn writes(&self) -> Vec<(&str, char)> {
        let mut writes = Vec::new();
        let mut start = 0;
        for (i, c) in self.stdout.char_indices() {
            if c == '\n' || c == '\r' {
                writes.push((&self.stdout[start..i], c));
                start = i + 1;
            }
        }
        writes
    }

    /// True if `s` looks like `HH:MM:SS`
    pub fn is_hms(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == 8
            && b[2] == b':'
            && b[5] == b':'
            && [0, 1, 3, 4, 6, 7].iter().all(|&i| b[i].is_ascii_digit())
    }
}

/// Command for the tick binary under test
pub fn tick_cmd() -> Command {
    Command::cargo_bin("tick").expect("tick binary should be built")
}

/// Run the CLI with the given arguments and capture everything
pub fn tick(args: &[&str]) -> CliResponse {
    let started = Instant::now();
    let output = tick_cmd()
        .args(args)
        .timeout(Duration::from_secs(30))
        .output()
        .expect("Failed to run tick");
    let elapsed = started.elapsed();

    let exit_code = output.status.code().unwrap_or(-1);
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_status: ExitStatus::from(exit_code),
        exit_code,
        elapsed,
    }
}
