//! Output format selection.

use super::folded::write_folded;
use super::pprof::write_pprof;
use crate::aggregator::Aggregation;
use crate::profile::build_profile;
use crate::utils::config::{FORMAT_FOLDED, FORMAT_PPROF};
use crate::utils::error::{FormatError, OutputError};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// How a rendered aggregation is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Folded stacks, as read by FlameGraph and inferno
    Folded,
    /// Gzip-compressed pprof protobuf
    Pprof,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Folded => FORMAT_FOLDED,
            Format::Pprof => FORMAT_PPROF,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FORMAT_FOLDED => Ok(Format::Folded),
            FORMAT_PPROF => Ok(Format::Pprof),
            other => Err(FormatError::Unknown(other.to_string())),
        }
    }
}

/// Render an aggregation in the given format
///
/// `hz` is only used by the pprof format.
pub fn write_format<W: Write>(
    writer: &mut W,
    format: Format,
    aggregation: &Aggregation,
    hz: u32,
) -> Result<(), OutputError> {
    match format {
        Format::Folded => write_folded(writer, &aggregation.counts())?,
        Format::Pprof => {
            let profile = build_profile(aggregation, hz)?;
            write_pprof(writer, &profile)?;
        }
    }
    Ok(())
}
