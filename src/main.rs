//! stackfold CLI
//!
//! Renders aggregated stack samples as folded text or pprof profiles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use stackfold::commands::{
    display_version, execute_render, inspect_profile_file, validate_args, RenderArgs,
};
use stackfold::output::Format;

/// stackfold - render sampled call stacks
#[derive(Parser, Debug)]
#[command(name = "stackfold")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an aggregation file
    Render {
        /// Aggregation JSON produced by the sampler
        #[arg(short, long)]
        input: PathBuf,

        /// Output format: folded or pprof
        #[arg(short, long, default_value = "folded")]
        format: Format,

        /// Sampling frequency in Hz (overrides the input file)
        #[arg(long, env = "STACKFOLD_HZ")]
        hz: Option<u32>,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of hot stacks shown in the summary
        #[arg(long, default_value = "10")]
        top_stacks: usize,

        /// Print a text summary to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Inspect a pprof file
    Inspect {
        /// Path to pprof file (gzip-compressed or raw)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            format,
            hz,
            output,
            top_stacks,
            summary,
        } => {
            let args = RenderArgs {
                input,
                format,
                hz,
                output,
                top_stacks,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(&args)?;
        }

        Commands::Inspect { file } => {
            inspect_profile_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
