//! stackfold
//!
//! Renders aggregated call-stack samples in two interchange formats:
//! - Folded stacks, for FlameGraph-compatible tools
//! - pprof, for `go tool pprof` and compatible viewers
//!
//! ## Getting Started
//!
//! ```bash
//! stackfold render --input stacks.json --format pprof --output cpu.pprof
//! stackfold --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod profile;
pub mod utils;
