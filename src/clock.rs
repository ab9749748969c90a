//! Wall-clock source and `HH:MM:SS` formatting

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern for a 24-hour, zero-padded time of day
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Format a moment as `HH:MM:SS` in its own time zone
pub fn format_time<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    moment.format(TIME_FORMAT).to_string()
}

/// Something that can tell the current time of day
pub trait Clock {
    /// The current time, already formatted as `HH:MM:SS`
    fn now(&self) -> String;
}

/// Reads the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> String {
        format_time(&Local::now())
    }
}
