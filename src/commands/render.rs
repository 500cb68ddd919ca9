//! Render command implementation.
//!
//! The render command:
//! 1. Reads the aggregation JSON
//! 2. Resolves the sampling frequency
//! 3. Writes the requested format to a file or stdout
//! 4. Optionally prints a summary

use super::models::RenderArgs;
use crate::aggregator::{calculate_hot_stacks, calculate_sample_distribution, Aggregation};
use crate::output::{write_format, write_to_file};
use crate::parser::read_aggregation;
use crate::utils::config::DEFAULT_HZ;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed input
/// * Invalid sampling frequency or frame metadata (pprof)
/// * File or stdout write errors
pub fn execute_render(args: &RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading aggregation from {}", args.input.display());
    let input = read_aggregation(&args.input)
        .with_context(|| format!("Failed to read aggregation from {}", args.input.display()))?;

    let hz = resolve_hz(args.hz, input.hz);
    debug!("Using sample frequency {} Hz", hz);

    info!(
        "Step 2/3: Rendering {} stacks as {}",
        input.aggregation.len(),
        args.format
    );
    match &args.output {
        Some(path) => {
            write_to_file(path, args.format, &input.aggregation, hz)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("✓ Output written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_format(&mut handle, args.format, &input.aggregation, hz)
                .context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    if args.print_summary {
        info!("Step 3/3: Printing summary");
        eprintln!("{}", render_summary(&input.aggregation, args.top_stacks));
    } else {
        info!("Step 3/3: Skipping summary (not requested)");
    }

    info!(
        "Render completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// CLI flag wins, then the input file, then `DEFAULT_HZ`
pub fn resolve_hz(cli_hz: Option<u32>, input_hz: Option<u32>) -> u32 {
    cli_hz.or(input_hz).unwrap_or(DEFAULT_HZ)
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.hz == Some(0) {
        anyhow::bail!("hz must be greater than 0");
    }

    if args.top_stacks == 0 {
        anyhow::bail!("top_stacks must be greater than 0");
    }

    Ok(())
}

/// Text summary: distribution line plus the hottest stacks
pub fn render_summary(aggregation: &Aggregation, top_n: usize) -> String {
    let mut lines = Vec::new();
    let dist = calculate_sample_distribution(aggregation);

    lines.push(dist.summary());
    for (i, hot) in calculate_hot_stacks(aggregation, top_n).iter().enumerate() {
        lines.push(format!(
            "  {:>2}. {:>8} ({:>5.1}%)  {}",
            i + 1,
            hot.count,
            hot.percentage,
            hot.stack
        ));
    }

    if aggregation.len() > top_n {
        lines.push(format!(
            "  (Showing top {} of {} unique stacks)",
            top_n,
            aggregation.len()
        ));
    }

    lines.join("\n")
}
