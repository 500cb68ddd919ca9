//! Structured (pprof) profile construction.
//!
//! - `schema`: the in-memory object graph
//! - `builder`: aggregation -> object graph
//! - `proto`: protobuf wire messages

pub mod builder;
pub mod proto;
pub mod schema;

// Re-export main types
pub use builder::{build_profile, estimated_nanos};
pub use schema::{Function, Line, Location, Mapping, Sample, StructuredProfile, ValueType};
