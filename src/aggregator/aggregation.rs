//! Aggregated stack samples, as handed over by a sampler.
//!
//! Stacks are keyed by their signature: frame names joined with `;`,
//! root first.
//!
//! Example: "main;handle_request;parse_body"
//! This means: main called handle_request which called parse_body.

use crate::utils::config::STACK_DELIMITER;
use crate::utils::error::ProfileError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source metadata for one frame of a stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Source file path
    pub file: String,

    /// Line at which the call occurs
    pub line: i64,

    /// First line of the function definition
    #[serde(default, alias = "startLine")]
    pub start_line: i64,
}

impl FrameRecord {
    pub fn new(file: impl Into<String>, line: i64, start_line: i64) -> Self {
        Self {
            file: file.into(),
            line,
            start_line,
        }
    }
}

/// One aggregation entry: how often a stack was seen, plus its frames
/// (root first, parallel to the signature segments)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSample {
    pub count: u64,

    #[serde(default)]
    pub frames: Vec<FrameRecord>,
}

impl StackSample {
    pub fn new(count: u64, frames: Vec<FrameRecord>) -> Self {
        Self { count, frames }
    }
}

/// A frame name joined with its source metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub name: &'a str,
    pub file: &'a str,
    pub line: i64,
    pub start_line: i64,
}

impl<'a> Frame<'a> {
    pub fn new(name: &'a str, file: &'a str, line: i64, start_line: i64) -> Self {
        Self {
            name,
            file,
            line,
            start_line,
        }
    }
}

/// Pair each signature segment with its frame record.
///
/// # Errors
/// * `ProfileError::FrameCountMismatch` - segment and record counts differ
pub fn resolve_frames<'a>(
    signature: &'a str,
    records: &'a [FrameRecord],
) -> Result<Vec<Frame<'a>>, ProfileError> {
    let names: Vec<&str> = signature.split(STACK_DELIMITER).collect();

    if names.len() != records.len() {
        return Err(ProfileError::FrameCountMismatch {
            stack: signature.to_string(),
            segments: names.len(),
            records: records.len(),
        });
    }

    Ok(names
        .into_iter()
        .zip(records)
        .map(|(name, record)| Frame::new(name, &record.file, record.line, record.start_line))
        .collect())
}

/// Build the signature for a stack given root first
pub fn stack_signature(frames: &[Frame<'_>]) -> String {
    let delimiter = STACK_DELIMITER.to_string();
    let names: Vec<&str> = frames.iter().map(|f| f.name).collect();
    names.join(delimiter.as_str())
}

/// Stack signature -> sample, for one profiling run
///
/// **Public** - input to both renderers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregation {
    stacks: HashMap<String, StackSample>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the sample for a signature
    pub fn insert(&mut self, signature: impl Into<String>, sample: StackSample) {
        self.stacks.insert(signature.into(), sample);
    }

    /// Record one observation of a stack (root first).
    ///
    /// Frame records are captured the first time a signature is seen;
    /// later observations only bump the count.
    ///
    /// # Errors
    /// * `ProfileError::EmptyStack` - `frames` is empty
    /// * `ProfileError::InvalidFrameName` - a name contains the stack delimiter
    pub fn observe(&mut self, frames: &[Frame<'_>]) -> Result<(), ProfileError> {
        if frames.is_empty() {
            return Err(ProfileError::EmptyStack);
        }
        if let Some(frame) = frames.iter().find(|f| f.name.contains(STACK_DELIMITER)) {
            return Err(ProfileError::InvalidFrameName(frame.name.to_string()));
        }

        let signature = stack_signature(frames);

        if let Some(sample) = self.stacks.get_mut(&signature) {
            sample.count = sample.count.saturating_add(1);
            return Ok(());
        }

        debug!("New stack: {}", signature);
        let records = frames
            .iter()
            .map(|f| FrameRecord::new(f.file, f.line, f.start_line))
            .collect();
        self.stacks.insert(signature, StackSample::new(1, records));
        Ok(())
    }

    pub fn get(&self, signature: &str) -> Option<&StackSample> {
        self.stacks.get(signature)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StackSample)> {
        self.stacks.iter()
    }

    /// Signature -> count view used by the folded renderer
    pub fn counts(&self) -> HashMap<String, u64> {
        self.stacks
            .iter()
            .map(|(stack, sample)| (stack.clone(), sample.count))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl FromIterator<(String, StackSample)> for Aggregation {
    fn from_iter<I: IntoIterator<Item = (String, StackSample)>>(iter: I) -> Self {
        Self {
            stacks: iter.into_iter().collect(),
        }
    }
}
