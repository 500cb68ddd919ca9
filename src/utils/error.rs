//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while building a structured profile
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Sample frequency must be positive, got {0}")]
    InvalidFrequency(u32),

    #[error("Stack '{stack}' has {segments} frames but {records} frame records")]
    FrameCountMismatch {
        stack: String,
        segments: usize,
        records: usize,
    },

    #[error("Frame name '{0}' contains the stack delimiter")]
    InvalidFrameName(String),

    #[error("Cannot record an empty stack")]
    EmptyStack,

    #[error("Sample count {count} for stack '{stack}' does not fit in a signed 64-bit value")]
    CountOutOfRange { stack: String, count: u64 },
}

/// Errors that can occur while parsing aggregation input
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid aggregation: {0}")]
    InvalidFormat(String),
}

/// Errors for unrecognized output format identifiers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown output format '{0}' (expected 'folded' or 'pprof')")]
    Unknown(String),
}

/// Errors that can occur during output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to build profile: {0}")]
    Profile(#[from] ProfileError),

    #[error("Failed to decode pprof data: {0}")]
    DecodeFailed(#[from] prost::DecodeError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
