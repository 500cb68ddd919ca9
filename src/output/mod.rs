//! Output writers for rendered profiles.
//!
//! This module handles writing data in the supported formats:
//! - Folded stacks (plain text)
//! - pprof (gzip-compressed protobuf)

pub mod folded;
pub mod format;
pub mod pprof;

// Re-export main functions
pub use folded::{sorted_keys, write_folded};
pub use format::{write_format, Format};
pub use pprof::{read_pprof, to_proto, write_pprof};

use crate::aggregator::Aggregation;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Render an aggregation to a file
///
/// **Public** - file-based entry point used by the CLI
///
/// # Arguments
/// * `output_path` - Destination file (parent directories are created)
/// * `format` - Output format
/// * `aggregation` - Stacks to render
/// * `hz` - Sampling frequency (pprof only)
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Profile` - The aggregation cannot be turned into a profile
pub fn write_to_file(
    output_path: impl AsRef<Path>,
    format: Format,
    aggregation: &Aggregation,
    hz: u32,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} output to: {}", format, output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Render fully before touching the file so a bad aggregation leaves nothing behind
    let mut rendered = Vec::new();
    write_format(&mut rendered, format, aggregation, hz)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&rendered)?;
    writer.flush()?;

    info!(
        "Output written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
