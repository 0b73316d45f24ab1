//! # csvcatlib
//!
//! A library for combining delimited-text (CSV) files into a single
//! table by row-wise concatenation.
//!
//! ## Overview
//!
//! Each input file is parsed into a [`Table`] under a header policy. By
//! default the first record of a file supplies the column labels and the
//! rest are data; with [`HeaderPolicy::Synthesized`] every record is
//! data and labels are synthesized as `column_0`, `column_1`, and so on.
//! Tables are then concatenated in input order, preserving row order,
//! with no sorting, deduplication, or column reconciliation.
//!
//! The pipeline is strict about failure: every missing input is reported
//! in one error before any file is opened, a parse error aborts the run
//! before anything is written, and a file whose column count differs
//! from the first input is rejected.
//!
//! ## Example
//!
//! ```rust
//! use csvcatlib::{combine_files, resolve_output_path, write_table, CombineOptions};
//! use std::fs;
//! use std::path::Path;
//! use tempfile::tempdir;
//!
//! // Set up two small input files
//! let dir = tempdir().unwrap();
//! let a = dir.path().join("a.csv");
//! let b = dir.path().join("b.csv");
//! fs::write(&a, "x,y\n1,2\n3,4\n").unwrap();
//! fs::write(&b, "x,y\n5,6\n").unwrap();
//!
//! // Combine them in order
//! let inputs = vec![a, b];
//! let options = CombineOptions::new();
//! let combined = combine_files(&inputs, &options).unwrap();
//! assert_eq!(combined.labels, vec!["x", "y"]);
//! assert_eq!(combined.row_count(), 3);
//!
//! // A relative output name lands next to the first input
//! let target = resolve_output_path(&inputs, Path::new("CombinedData.csv"));
//! write_table(&combined, &target, &options).unwrap();
//! assert_eq!(fs::read_to_string(&target).unwrap(), "x,y\n1,2\n3,4\n5,6\n");
//! ```

pub mod chooser;
pub mod combine;
pub mod error;
pub mod loader;
pub mod options;
pub mod output;
pub mod table;

pub use chooser::{FileChooser, StaticChooser};
pub use combine::combine_files;
pub use error::CsvcatError;
pub use loader::{load_table, missing_paths};
pub use options::{CombineOptions, HeaderPolicy};
pub use output::{resolve_output_path, write_table};
pub use table::{synthetic_labels, Table};

/// Result type for csvcatlib operations
pub type Result<T> = std::result::Result<T, CsvcatError>;
