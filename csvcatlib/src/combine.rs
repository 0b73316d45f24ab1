//! High-level combining API.
//!
//! This module provides the main entry point for concatenating a list
//! of delimited-text files into a single in-memory table.

use std::path::PathBuf;

use crate::error::CsvcatError;
use crate::loader::{load_table, missing_paths};
use crate::options::CombineOptions;
use crate::table::Table;
use crate::Result;

/// Combine the given input files into one table.
///
/// This is the main entry point for concatenation. It:
/// 1. Checks the entire input list for existence, reporting every
///    missing path in one error before any file is read
/// 2. Parses each file into a table, in the order the paths were given
/// 3. Appends each later file's rows onto the first file's table
///
/// Row order within each file and the order of the files themselves are
/// both preserved. The combined labels come from the first file; a later
/// file whose column count differs from the first is rejected. Files are
/// assumed schema-compatible beyond that width check, so no label
/// reconciliation happens.
///
/// # Example
///
/// ```rust,ignore
/// use csvcatlib::{combine_files, CombineOptions, HeaderPolicy};
///
/// // Header row supplies the labels
/// let combined = combine_files(&inputs, &CombineOptions::new())?;
///
/// // Headerless inputs: every row is data
/// let options = CombineOptions::new().header_policy(HeaderPolicy::Synthesized);
/// let combined = combine_files(&inputs, &options)?;
/// ```
pub fn combine_files(paths: &[PathBuf], options: &CombineOptions) -> Result<Table> {
    let missing = missing_paths(paths);
    if !missing.is_empty() {
        return Err(CsvcatError::MissingFiles(missing));
    }

    let mut combined: Option<Table> = None;

    for path in paths {
        let table = load_table(path, options)?;
        if let Some(first) = combined.as_mut() {
            if table.column_count() != first.column_count() {
                return Err(CsvcatError::ColumnMismatch {
                    path: path.clone(),
                    expected: first.column_count(),
                    found: table.column_count(),
                });
            }
            first.rows.extend(table.rows);
        } else {
            combined = Some(table);
        }
    }

    Ok(combined.unwrap_or_default())
}
