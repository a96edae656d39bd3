use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::RawTable;

/// Reads a CSV file with a header row.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
        _ => Error::Io(e),
    })?;

    tracing::info!("Loading applicant data from {}", path.display());
    load_reader(file)
}

/// Reads CSV bytes with a header row from any source (uploads, stdin).
pub fn load_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    tracing::info!("Loaded {} rows with {} columns", rows.len(), headers.len());
    Ok(RawTable::new(headers, rows))
}
