//! Input existence checking and per-file parsing
//!
//! Loading is strict: the whole input list is checked for existence
//! first, so every missing path can be reported together before any
//! file is opened. Each file is then parsed into a [`Table`] under the
//! configured header policy. Ragged records (a row whose field count
//! differs from the rest of the file) are rejected by the parser and
//! surface as a parse error naming the file.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::CsvcatError;
use crate::options::{CombineOptions, HeaderPolicy};
use crate::table::{synthetic_labels, Table};
use crate::Result;

/// Return the subset of `paths` that do not refer to existing files,
/// preserving input order.
pub fn missing_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| !path.is_file())
        .cloned()
        .collect()
}

/// Parse one delimited-text file into a [`Table`].
///
/// Under [`HeaderPolicy::FirstRow`] the first record supplies the column
/// labels and the remaining records become rows. Under
/// [`HeaderPolicy::Synthesized`] every record is a row and labels are
/// synthesized from the width of the first record. A file with no
/// records at all is an error; a header-only file is a valid table with
/// zero rows.
pub fn load_table(path: &Path, options: &CombineOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(!options.header_policy.is_synthesized())
        .from_path(path)
        .map_err(|e| CsvcatError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut table = match options.header_policy {
        HeaderPolicy::FirstRow => {
            let headers = reader.headers().map_err(|e| CsvcatError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
            if headers.is_empty() {
                return Err(CsvcatError::EmptyInput(path.to_path_buf()));
            }
            Table::with_labels(headers.iter().map(String::from).collect())
        }
        HeaderPolicy::Synthesized => Table::default(),
    };

    for record in reader.records() {
        let record = record.map_err(|e| CsvcatError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        if table.labels.is_empty() {
            table.labels = synthetic_labels(record.len());
        }
        table.rows.push(record.iter().map(String::from).collect());
    }

    // Synthesized mode reaches here with empty labels only when the
    // file yielded no records.
    if table.labels.is_empty() {
        return Err(CsvcatError::EmptyInput(path.to_path_buf()));
    }

    Ok(table)
}
