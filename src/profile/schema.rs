//! In-memory structured profile.
//!
//! Mirrors the pprof object graph before string interning: records refer
//! to each other by ID and carry their strings inline.

use crate::utils::config::{SAMPLES_TYPE, SAMPLES_UNIT, TIME_TYPE, TIME_UNIT};

/// A sample value type, e.g. ("time", "nanoseconds")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueType {
    pub kind: String,
    pub unit: String,
}

impl ValueType {
    pub fn new(kind: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            unit: unit.into(),
        }
    }

    /// `(samples, count)` followed by `(time, nanoseconds)`
    pub fn defaults() -> Vec<ValueType> {
        vec![
            ValueType::new(SAMPLES_TYPE, SAMPLES_UNIT),
            ValueType::new(TIME_TYPE, TIME_UNIT),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: u64,
    pub has_functions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub id: u64,
    pub name: String,
    pub filename: String,
    pub start_line: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub function_id: u64,
    pub line: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: u64,
    pub mapping_id: u64,
    pub lines: Vec<Line>,
}

/// One sampled stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Leaf first
    pub location_ids: Vec<u64>,

    /// Parallel to `StructuredProfile::sample_types`
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredProfile {
    pub sample_types: Vec<ValueType>,
    pub mappings: Vec<Mapping>,
    pub functions: Vec<Function>,
    pub locations: Vec<Location>,
    pub samples: Vec<Sample>,
}

impl StructuredProfile {
    pub fn function(&self, id: u64) -> Option<&Function> {
        self.functions.iter().find(|f| f.id == id)
    }

    pub fn location(&self, id: u64) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Names of the functions behind a sample's locations, leaf first
    pub fn sample_function_names(&self, sample: &Sample) -> Vec<&str> {
        sample
            .location_ids
            .iter()
            .filter_map(|id| self.location(*id))
            .flat_map(|loc| loc.lines.iter())
            .filter_map(|line| self.function(line.function_id))
            .map(|f| f.name.as_str())
            .collect()
    }
}
