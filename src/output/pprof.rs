//! pprof output: string interning, protobuf encoding, gzip framing.

use crate::profile::proto;
use crate::profile::StructuredProfile;
use crate::utils::error::OutputError;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use prost::Message;
use std::collections::HashMap;
use std::io::{self, Read, Write};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// pprof interns strings: records hold indices into a shared table.
/// Index 0 is always the empty string.
struct StringTable {
    indices: HashMap<String, i64>,
    table: Vec<String>,
}

impl StringTable {
    fn new() -> Self {
        let mut st = Self {
            indices: HashMap::new(),
            table: Vec::new(),
        };
        st.intern("");
        st
    }

    fn intern(&mut self, s: &str) -> i64 {
        if let Some(&index) = self.indices.get(s) {
            return index;
        }
        let index = self.table.len() as i64;
        self.indices.insert(s.to_string(), index);
        self.table.push(s.to_string());
        index
    }

    fn finish(self) -> Vec<String> {
        self.table
    }
}

/// Convert the object graph into wire messages
pub fn to_proto(profile: &StructuredProfile) -> proto::Profile {
    let mut st = StringTable::new();

    let sample_type = profile
        .sample_types
        .iter()
        .map(|vt| proto::ValueType {
            r#type: st.intern(&vt.kind),
            unit: st.intern(&vt.unit),
        })
        .collect();

    let mapping = profile
        .mappings
        .iter()
        .map(|m| proto::Mapping {
            id: m.id,
            has_functions: m.has_functions,
            ..Default::default()
        })
        .collect();

    let function = profile
        .functions
        .iter()
        .map(|f| proto::Function {
            id: f.id,
            name: st.intern(&f.name),
            system_name: 0,
            filename: st.intern(&f.filename),
            start_line: f.start_line,
        })
        .collect();

    let location = profile
        .locations
        .iter()
        .map(|l| proto::Location {
            id: l.id,
            mapping_id: l.mapping_id,
            line: l
                .lines
                .iter()
                .map(|line| proto::Line {
                    function_id: line.function_id,
                    line: line.line,
                })
                .collect(),
            ..Default::default()
        })
        .collect();

    let sample = profile
        .samples
        .iter()
        .map(|s| proto::Sample {
            location_id: s.location_ids.clone(),
            value: s.values.clone(),
            label: Vec::new(),
        })
        .collect();

    proto::Profile {
        sample_type,
        sample,
        mapping,
        location,
        function,
        string_table: st.finish(),
        ..Default::default()
    }
}

/// Write a profile as gzip-compressed protobuf
///
/// **Public** - main entry point for pprof output
pub fn write_pprof<W: Write>(writer: &mut W, profile: &StructuredProfile) -> io::Result<()> {
    let bytes = to_proto(profile).encode_to_vec();
    debug!("Encoded pprof message ({} bytes before compression)", bytes.len());

    let mut encoder = GzEncoder::new(writer, Compression::default());
    encoder.write_all(&bytes)?;
    encoder.finish()?;

    Ok(())
}

/// Read a pprof profile, gzip-compressed or raw
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error while reading or decompressing
/// * `OutputError::DecodeFailed` - bytes are not a valid profile message
pub fn read_pprof<R: Read>(mut reader: R) -> Result<proto::Profile, OutputError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let bytes = if raw.starts_with(&GZIP_MAGIC) {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut decoded)?;
        decoded
    } else {
        raw
    };

    Ok(proto::Profile::decode(bytes.as_slice())?)
}
