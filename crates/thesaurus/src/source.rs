//! Loaders turning an on-disk thesaurus export into [`DescriptorRecord`]s.
//!
//! Two layouts are understood:
//!
//! - JSON: an array of `{"code", "name", "parent_code"}` objects
//! - TSV: `code<TAB>name<TAB>parent_code` per line, `#` comments allowed

use crate::error::{Result, ThesaurusError};
use crate::index::ThesaurusIndex;
use crate::types::DescriptorRecord;
use std::path::Path;

/// On-disk layout of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Tsv,
}

impl SourceFormat {
    /// `.json` files are JSON, everything else is TSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Tsv,
        }
    }
}

pub fn parse_json(text: &str) -> Result<Vec<DescriptorRecord>> {
    let records: Vec<DescriptorRecord> = serde_json::from_str(text)?;
    Ok(records.into_iter().map(DescriptorRecord::normalized).collect())
}

pub fn parse_tsv(text: &str) -> Result<Vec<DescriptorRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [code, name, parent] = fields.as_slice() else {
            return Err(ThesaurusError::Source(format!(
                "line {}: expected 3 tab-separated fields, found {}",
                line_no + 1,
                fields.len()
            )));
        };

        records.push(DescriptorRecord::new(code, name, Some(*parent)));
    }

    Ok(records)
}

pub fn parse(text: &str, format: SourceFormat) -> Result<Vec<DescriptorRecord>> {
    match format {
        SourceFormat::Json => parse_json(text),
        SourceFormat::Tsv => parse_tsv(text),
    }
}

/// Read and parse a record file, picking the format from its extension.
pub fn load_records(path: &Path) -> Result<Vec<DescriptorRecord>> {
    let text = std::fs::read_to_string(path)?;
    let records = parse(&text, SourceFormat::from_path(path))?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load a record file and build the index in one step.
pub fn load_index(path: &Path, root_name: &str) -> Result<ThesaurusIndex> {
    ThesaurusIndex::build_with_root(load_records(path)?, root_name)
}
