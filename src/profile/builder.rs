//! Build a structured profile from an aggregation.
//!
//! Every frame occurrence gets its own Function and Location record.
//! Nothing is deduplicated across stacks; pprof consumers coalesce
//! identical symbols themselves.

use super::schema::{Function, Line, Location, Mapping, Sample, StructuredProfile, ValueType};
use crate::aggregator::{resolve_frames, Aggregation, Frame, StackSample};
use crate::utils::config::{MAPPING_ID, NANOS_PER_SECOND};
use crate::utils::error::ProfileError;
use log::debug;

/// ID counters for one build. All start at 1.
#[derive(Debug)]
struct BuilderContext {
    next_function_id: u64,
    next_location_id: u64,
    /// Informational only; advances once per frame
    line: i64,
}

impl BuilderContext {
    fn new() -> Self {
        Self {
            next_function_id: 1,
            next_location_id: 1,
            line: 1,
        }
    }

    /// Add a Function and a Location for `frame`, returning the location ID
    fn push_frame(&mut self, profile: &mut StructuredProfile, frame: &Frame<'_>) -> u64 {
        let function_id = self.next_function_id;
        profile.functions.push(Function {
            id: function_id,
            name: frame.name.to_string(),
            filename: frame.file.to_string(),
            start_line: frame.start_line,
        });

        let location_id = self.next_location_id;
        profile.locations.push(Location {
            id: location_id,
            mapping_id: MAPPING_ID,
            lines: vec![Line {
                function_id,
                line: frame.line,
            }],
        });

        self.line += 1;
        self.next_function_id += 1;
        self.next_location_id += 1;

        location_id
    }
}

/// Estimated time covered by `count` samples at `hz`.
///
/// The per-sample duration is truncated before multiplying.
pub fn estimated_nanos(count: i64, hz: u32) -> i64 {
    let nanos_per_sample = NANOS_PER_SECOND / i64::from(hz);
    count.saturating_mul(nanos_per_sample)
}

/// Build a structured profile
///
/// **Public** - main entry point for the pprof path
///
/// # Arguments
/// * `aggregation` - Stack signature -> count + frame records
/// * `hz` - Sampling frequency the counts were taken at
///
/// # Errors
/// * `ProfileError::InvalidFrequency` - `hz` is zero
/// * `ProfileError::FrameCountMismatch` - a signature and its frame records disagree
/// * `ProfileError::CountOutOfRange` - a count exceeds `i64::MAX`
pub fn build_profile(aggregation: &Aggregation, hz: u32) -> Result<StructuredProfile, ProfileError> {
    if hz == 0 {
        return Err(ProfileError::InvalidFrequency(hz));
    }

    debug!("Building profile from {} stacks at {} Hz", aggregation.len(), hz);

    let mut ctx = BuilderContext::new();
    let mut profile = StructuredProfile {
        sample_types: ValueType::defaults(),
        mappings: vec![Mapping {
            id: MAPPING_ID,
            has_functions: true,
        }],
        ..Default::default()
    };

    for (stack, entry) in aggregation.iter() {
        let sample = build_sample(&mut ctx, &mut profile, stack, entry, hz)?;
        profile.samples.push(sample);
    }

    debug!(
        "Built profile: {} functions, {} locations, {} samples ({} frames)",
        profile.functions.len(),
        profile.locations.len(),
        profile.samples.len(),
        ctx.line - 1
    );

    Ok(profile)
}

fn build_sample(
    ctx: &mut BuilderContext,
    profile: &mut StructuredProfile,
    stack: &str,
    entry: &StackSample,
    hz: u32,
) -> Result<Sample, ProfileError> {
    let count = i64::try_from(entry.count).map_err(|_| ProfileError::CountOutOfRange {
        stack: stack.to_string(),
        count: entry.count,
    })?;

    let frames = resolve_frames(stack, &entry.frames)?;

    let mut location_ids: Vec<u64> = frames
        .iter()
        .map(|frame| ctx.push_frame(profile, frame))
        .collect();
    // Frames arrive root first; pprof wants leaf first.
    location_ids.reverse();

    Ok(Sample {
        location_ids,
        values: vec![count, estimated_nanos(count, hz)],
    })
}
