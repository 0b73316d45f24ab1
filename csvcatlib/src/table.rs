//! Core data structure for tabular data
//!
//! Every input file is parsed into a [`Table`], and the combined result
//! is a `Table` too. Cells are kept as the text the parser produced; no
//! type inference or schema reconciliation is applied.

/// An in-memory table: ordered column labels plus ordered rows of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column labels, read from a header row or synthesized positionally
    pub labels: Vec<String>,
    /// Data rows, each an ordered list of cell values
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given labels and no rows
    pub fn with_labels(labels: Vec<String>) -> Self {
        Self {
            labels,
            rows: Vec::new(),
        }
    }

    /// Number of data rows (the label row is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, as defined by the labels
    pub fn column_count(&self) -> usize {
        self.labels.len()
    }
}

/// Synthesize positional column labels: `column_0`, `column_1`, ...
pub fn synthetic_labels(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("column_{}", index)).collect()
}
