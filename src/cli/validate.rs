//! Validation of the `seconds` argument
//!
//! Accepts what a plain integer conversion accepts: surrounding whitespace,
//! an optional sign and leading zeros. The result must be strictly positive.

use std::num::NonZeroU64;

use crate::errors::{Result, TickError};

/// A validated, strictly positive number of seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seconds(NonZeroU64);

impl Seconds {
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Seconds)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Parse and validate a duration token.
///
/// Fails with [`TickError::InvalidArgument`] when the token is not an
/// integer or is not greater than zero. Positive values too large for a
/// `u64` saturate to `u64::MAX` seconds.
pub fn parse_seconds(token: &str) -> Result<Seconds> {
    let trimmed = token.trim();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TickError::InvalidArgument(format!(
            "invalid integer value: '{}'",
            token
        )));
    }

    // "-0" and "000" are zero, and zero is not positive either
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(TickError::InvalidArgument(format!(
            "{} is not a positive integer",
            token
        )));
    }

    // Only overflow can fail here: the token is all digits and non-zero
    let value = digits.parse::<NonZeroU64>().unwrap_or(NonZeroU64::MAX);
    Ok(Seconds(value))
}
