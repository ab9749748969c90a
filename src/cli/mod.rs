//! CLI argument parsing and validation

pub mod args;
pub mod validate;

// Re-exports
pub use args::{Args, LogFormat};
pub use validate::{parse_seconds, Seconds};
