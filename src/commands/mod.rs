//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use models::RenderArgs;
pub use render::{execute_render, render_summary, resolve_hz, validate_args};
pub use utils::{display_version, inspect_profile_file, summarize_pprof, PprofSummary};
