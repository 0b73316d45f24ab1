//! Error types for csvcatlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while combining delimited-text files
#[derive(Error, Debug)]
pub enum CsvcatError {
    /// One or more input paths do not refer to existing files
    #[error("the following input files could not be found:{}", format_path_list(.0))]
    MissingFiles(Vec<PathBuf>),

    /// An input file contained no records at all
    #[error("input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    /// An input file could not be read or decoded as delimited text
    #[error("failed to read file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: csv::Error,
    },

    /// A later input's column count differs from the first input's
    #[error(
        "column count mismatch in '{}': the first input has {expected} columns, this file has {found}",
        .path.display()
    )]
    ColumnMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// The combined output could not be created or written
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: csv::Error,
    },

    /// No interactive file chooser can be presented in this environment
    #[error("file selection dialog unavailable: {0}")]
    ChooserUnavailable(String),
}

/// Render each path on its own indented line, for multi-path messages.
fn format_path_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("\n  - {}", path.display()))
        .collect()
}
