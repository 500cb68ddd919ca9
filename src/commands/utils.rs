use crate::output::read_pprof;
use crate::profile::proto;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Counts and declared types of a decoded pprof profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PprofSummary {
    /// (type, unit) pairs
    pub sample_types: Vec<(String, String)>,
    pub mappings: usize,
    pub functions: usize,
    pub locations: usize,
    pub samples: usize,
    /// Sum of each value column across samples
    pub totals: Vec<i64>,
}

/// Summarize a decoded profile
pub fn summarize_pprof(profile: &proto::Profile) -> PprofSummary {
    let string_at = |index: i64| {
        usize::try_from(index)
            .ok()
            .and_then(|i| profile.string_table.get(i))
            .cloned()
            .unwrap_or_default()
    };

    let sample_types = profile
        .sample_type
        .iter()
        .map(|vt| (string_at(vt.r#type), string_at(vt.unit)))
        .collect();

    let mut totals = vec![0i64; profile.sample_type.len()];
    for sample in &profile.sample {
        for (total, value) in totals.iter_mut().zip(&sample.value) {
            *total = total.saturating_add(*value);
        }
    }

    PprofSummary {
        sample_types,
        mappings: profile.mapping.len(),
        functions: profile.function.len(),
        locations: profile.location.len(),
        samples: profile.sample.len(),
        totals,
    }
}

/// Inspect a pprof file and print its summary
pub fn inspect_profile_file(file_path: &Path) -> Result<()> {
    println!("Inspecting profile: {}", file_path.display());

    let file = File::open(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;
    let profile = read_pprof(file).context("Failed to decode pprof profile")?;
    let summary = summarize_pprof(&profile);

    println!("✓ Valid pprof profile");
    for ((kind, unit), total) in summary.sample_types.iter().zip(&summary.totals) {
        println!("  Sample type: {}/{} (total {})", kind, unit, total);
    }
    println!("  Mappings:  {}", summary.mappings);
    println!("  Functions: {}", summary.functions);
    println!("  Locations: {}", summary.locations);
    println!("  Samples:   {}", summary.samples);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("stackfold v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Renders aggregated stack samples as folded text or pprof profiles.");
}
