use crate::output::Format;
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Aggregation JSON produced by the sampler
    pub input: PathBuf,

    /// Output format
    pub format: Format,

    /// Sampling frequency override (None = use the input's, then the default)
    pub hz: Option<u32>,

    /// Output file (None = stdout)
    pub output: Option<PathBuf>,

    /// Number of hot stacks shown in the summary
    pub top_stacks: usize,

    /// Print a text summary to stderr
    pub print_summary: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("stacks.json"),
            format: Format::Folded,
            hz: None,
            output: None,
            top_stacks: 10,
            print_summary: false,
        }
    }
}
