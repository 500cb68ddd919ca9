//! Aggregated stack samples and metrics over them.
//!
//! This module holds:
//! - The aggregation data model (signature -> count + frame records)
//! - Hot stack analysis and sample distribution statistics

pub mod aggregation;
pub mod metrics;

// Re-export main types and functions
pub use aggregation::{
    resolve_frames, stack_signature, Aggregation, Frame, FrameRecord, StackSample,
};
pub use metrics::{calculate_hot_stacks, calculate_sample_distribution, HotStack, SampleDistribution};
