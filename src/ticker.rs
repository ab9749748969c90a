//! The print loop
//!
//! Prints one timestamp per tick. `N` ticks are separated by `N - 1`
//! one-second pauses; the first tick is printed immediately and nothing
//! waits after the last one. Pauses are not corrected for the time spent
//! formatting and writing, so long runs drift slightly late.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cli::Seconds;
use crate::clock::Clock;
use crate::errors::Result;

/// Gap between two consecutive ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How often an interruptible sleep checks its flag
const POLL_SLICE: Duration = Duration::from_millis(50);

/// How consecutive ticks share the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Every tick on its own line
    #[default]
    Normal,
    /// Each tick overwrites the previous one; only the last stays
    Clear,
}

/// What ends a printed timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Newline,
    CarriageReturn,
}

impl Terminator {
    /// Pick the terminator for tick `index` of `total`
    pub fn for_tick(index: u64, total: u64, mode: DisplayMode) -> Self {
        let last = index + 1 == total;
        if last || mode == DisplayMode::Normal {
            Terminator::Newline
        } else {
            Terminator::CarriageReturn
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Terminator::Newline => "\n",
            Terminator::CarriageReturn => "\r",
        }
    }
}

/// Blocks between ticks.
///
/// Returns `false` if the wait was cut short and the loop should stop.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration) -> bool;
}

/// Sleeps on the current thread, waking early when `interrupted` is set
#[derive(Debug)]
pub struct ThreadSleeper<'a> {
    interrupted: &'a AtomicBool,
}

impl<'a> ThreadSleeper<'a> {
    pub fn new(interrupted: &'a AtomicBool) -> Self {
        Self { interrupted }
    }
}

impl Sleeper for ThreadSleeper<'_> {
    fn sleep(&mut self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            std::thread::sleep(POLL_SLICE.min(deadline - now));
        }
    }
}

/// Summary of a finished (or interrupted) run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub ticks: u64,
    pub pauses: u64,
    pub interrupted: bool,
}

/// Drives the print loop with a clock and a sleeper
pub struct Ticker<C, S> {
    clock: C,
    sleeper: S,
}

impl<C: Clock, S: Sleeper> Ticker<C, S> {
    pub fn new(clock: C, sleeper: S) -> Self {
        Self { clock, sleeper }
    }

    /// Print `duration` timestamps to `out`.
    ///
    /// Any write error ends the loop and is returned as is.
    pub fn run<W: Write>(
        &mut self,
        out: &mut W,
        duration: Seconds,
        mode: DisplayMode,
    ) -> Result<TickReport> {
        let total = duration.get();
        let mut report = TickReport::default();

        info!(seconds = total, ?mode, "Starting clock");

        for index in 0..total {
            let terminator = Terminator::for_tick(index, total, mode);
            let stamp = self.clock.now();

            write!(out, "{}{}", stamp, terminator.as_str())?;
            // '\r' never triggers a line-buffered flush
            out.flush()?;
            report.ticks += 1;

            debug!(index, time = %stamp, ?terminator, "Tick");

            if index + 1 == total {
                break;
            }

            if !self.sleeper.sleep(TICK_INTERVAL) {
                report.interrupted = true;
                info!(ticks = report.ticks, "Interrupted");
                return Ok(report);
            }
            report.pauses += 1;
        }

        info!(ticks = report.ticks, pauses = report.pauses, "Finished");
        Ok(report)
    }
}
