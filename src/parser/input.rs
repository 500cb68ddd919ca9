//! Aggregation input parser.
//!
//! Reads the JSON a sampler dumps at the end of a run. Two layouts are
//! accepted:
//!
//! ```json
//! { "hz": 99, "stacks": { "main;foo": { "count": 3, "frames": [...] } } }
//! ```
//!
//! or the bare `stacks` object. Entries may also be plain counts
//! (`"main;foo": 3`), which is enough for folded output.

use crate::aggregator::{Aggregation, StackSample};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Parsed input: the aggregation and the frequency it was sampled at, if recorded
#[derive(Debug, Clone, Default)]
pub struct AggregationInput {
    pub hz: Option<u32>,
    pub aggregation: Aggregation,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Count(u64),
    Sample(StackSample),
}

impl From<RawEntry> for StackSample {
    fn from(entry: RawEntry) -> Self {
        match entry {
            RawEntry::Count(count) => StackSample::new(count, Vec::new()),
            RawEntry::Sample(sample) => sample,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    hz: Option<u32>,
    stacks: HashMap<String, RawEntry>,
}

/// Parse aggregation JSON
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::JsonError` - Invalid JSON or entry shape
/// * `ParseError::InvalidFormat` - Top-level value is not an object
pub fn parse_aggregation(raw: &str) -> Result<AggregationInput, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let obj = value.as_object().ok_or_else(|| {
        ParseError::InvalidFormat("Aggregation must be a JSON object".to_string())
    })?;

    // Heuristic: an object with a "stacks" object is the full envelope
    let (hz, entries) = if obj.get("stacks").is_some_and(|s| s.is_object()) {
        let envelope: Envelope = serde_json::from_value(value)?;
        (envelope.hz, envelope.stacks)
    } else {
        debug!("No 'stacks' field, treating input as a bare stack map");
        let entries: HashMap<String, RawEntry> = serde_json::from_value(value)?;
        (None, entries)
    };

    if hz == Some(0) {
        warn!("Input records hz = 0; pprof output will be rejected unless --hz is given");
    }

    let aggregation: Aggregation = entries
        .into_iter()
        .map(|(stack, entry)| (stack, StackSample::from(entry)))
        .collect();

    debug!("Parsed {} stacks", aggregation.len());

    Ok(AggregationInput { hz, aggregation })
}

/// Read and parse an aggregation file
pub fn read_aggregation(input_path: impl AsRef<Path>) -> Result<AggregationInput, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading aggregation from: {}", input_path.display());

    let raw = std::fs::read_to_string(input_path)?;
    parse_aggregation(&raw)
}
