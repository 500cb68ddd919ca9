//! Input parsing.
//!
//! Turns sampler output (JSON) into an `Aggregation`.

pub mod input;

// Re-export main types
pub use input::{parse_aggregation, read_aggregation, AggregationInput};
