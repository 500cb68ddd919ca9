//! Configuration and constants for the renderers and the CLI.

/// Separator between frame names in a stack signature (root first)
pub const STACK_DELIMITER: char = ';';

/// Sampling frequency assumed when neither the input nor the CLI provides one
pub const DEFAULT_HZ: u32 = 99;

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// ID of the single synthetic mapping shared by every location
pub const MAPPING_ID: u64 = 1;

// Sample value types declared on every structured profile, in order
pub const SAMPLES_TYPE: &str = "samples";
pub const SAMPLES_UNIT: &str = "count";
pub const TIME_TYPE: &str = "time";
pub const TIME_UNIT: &str = "nanoseconds";

/// Format identifiers accepted on the command line
pub const FORMAT_FOLDED: &str = "folded";
pub const FORMAT_PPROF: &str = "pprof";
