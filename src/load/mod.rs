// src/load/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;

use std::{fs::File, io::Read, path::Path};
use tracing::debug;

/// Read every CSV record from `path` into memory.
///
/// The file handle is dropped before returning, on success or error.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;
    read_rows(file).with_context(|| format!("Failed to read CSV file: {:?}", path.as_ref()))
}

/// Parse all records from `reader`. No header handling is done here: row 0
/// is returned like any other row. Rows may have differing lengths.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // column counts are not checked
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if idx == 0 {
            strip_bom(&mut row);
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), "loaded CSV records");
    Ok(rows)
}

fn strip_bom(row: &mut [String]) {
    if let Some(first) = row.first_mut() {
        if let Some(rest) = first.strip_prefix('\u{feff}') {
            *first = rest.to_string();
        }
    }
}
