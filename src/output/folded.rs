//! Folded stack output.
//!
//! One line per stack: "<signature> <count>", sorted by signature so the
//! output is identical across runs for identical input.
//!
//! Example: "main;handle_request;parse_body 17"

use log::debug;
use std::collections::HashMap;
use std::io::{self, Write};

/// Write stacks in folded format
///
/// **Public** - main entry point for folded output
///
/// # Arguments
/// * `writer` - Destination stream
/// * `stacks` - Stack signature -> sample count
///
/// # Errors
/// Returns the first write error. Lines written before it stay written.
pub fn write_folded<W: Write>(writer: &mut W, stacks: &HashMap<String, u64>) -> io::Result<()> {
    debug!("Writing {} folded stacks", stacks.len());

    for stack in sorted_keys(stacks) {
        writeln!(writer, "{} {}", stack, stacks[stack])?;
    }

    Ok(())
}

/// All keys in ascending byte-wise order
pub fn sorted_keys<V>(stacks: &HashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = stacks.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
