//! Interrupt/signal handling
//!
//! A Ctrl+C handler flips a process-wide flag. The print loop's sleeper
//! polls that flag while it waits between ticks, so an interrupt stops
//! output before the next timestamp is written.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::status::ExitStatus;

/// Global flag for Ctrl+C interrupt handling
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Set once the first Ctrl+C has been seen
static SECOND_CTRL_C: AtomicBool = AtomicBool::new(false);

/// The flag the sleeper watches
pub fn flag() -> &'static AtomicBool {
    &INTERRUPTED
}

/// Check if the application was interrupted (Ctrl+C pressed)
#[inline]
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Set the interrupted flag (called from signal handler)
#[inline]
pub fn set_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the Ctrl+C handler.
///
/// The first interrupt only sets the flag and lets the loop wind down.
/// A second one exits on the spot.
pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        set_interrupted();

        // The clock line may end in '\r'; move off it first
        eprintln!("\nInterrupted");

        if SECOND_CTRL_C.swap(true, Ordering::SeqCst) {
            std::process::exit(ExitStatus::Interrupted as i32);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_flag() {
        // One-way flag; unit tests never sleep on the global one
        set_interrupted();
        assert!(was_interrupted());
        assert!(flag().load(Ordering::SeqCst));
    }
}
