//! CSV loader for feedback datasets.
//!
//! Column names are trimmed of surrounding whitespace and looked up by
//! name; column order is irrelevant. No row validation happens here —
//! missing or malformed values resolve to their documented defaults during
//! record construction.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{RaterError, Result};
use crate::record::FeedbackRecord;

/// Loads all feedback records from a CSV file at `path`.
///
/// # Errors
///
/// Returns [`RaterError::DatasetRead`] if the file cannot be opened and
/// [`RaterError::DatasetParse`] if its contents are not valid CSV.
pub fn load_records(path: &str) -> Result<Vec<FeedbackRecord>> {
    let file = File::open(path).map_err(|e| RaterError::DatasetRead {
        path: Path::new(path).to_path_buf(),
        source: e,
    })?;

    parse_records(file).map_err(|e| RaterError::DatasetParse {
        path: Path::new(path).to_path_buf(),
        source: e,
    })
}

/// Parses feedback records from any CSV reader.
pub fn parse_records<R: Read>(reader: R) -> std::result::Result<Vec<FeedbackRecord>, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);

    let columns: HashMap<String, usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect();

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let row = result?;
        records.push(FeedbackRecord::from_row(index, &columns, &row));
    }

    Ok(records)
}
