//! Input options for combining operations.
//!
//! This module contains the configuration types that control how input
//! files are parsed and how the combined output is written.

/// How column labels are derived for each input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// The first record of each file supplies the column labels; all
    /// remaining records are data
    #[default]
    FirstRow,
    /// Every record is data; labels are synthesized positionally as
    /// `column_0`, `column_1`, ...
    Synthesized,
}

impl HeaderPolicy {
    /// True when labels are synthesized rather than read from the file
    pub fn is_synthesized(&self) -> bool {
        matches!(self, HeaderPolicy::Synthesized)
    }
}

/// Options controlling parsing and serialization of delimited text.
///
/// The same options apply to every input file and to the output, so a
/// run is internally consistent: one header policy, one delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineOptions {
    /// Header policy applied to every input file
    pub header_policy: HeaderPolicy,
    /// Field delimiter for reading inputs and writing the output
    pub delimiter: u8,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::FirstRow,
            delimiter: b',',
        }
    }
}

impl CombineOptions {
    /// Create options with the defaults: header row, comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the header policy
    pub fn header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    /// Builder: set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = CombineOptions::default();
        assert_eq!(options.header_policy, HeaderPolicy::FirstRow);
        assert_eq!(options.delimiter, b',');
    }

    #[test]
    fn test_options_builder() {
        let options = CombineOptions::new()
            .header_policy(HeaderPolicy::Synthesized)
            .delimiter(b';');
        assert_eq!(options.header_policy, HeaderPolicy::Synthesized);
        assert_eq!(options.delimiter, b';');
    }

    #[test]
    fn test_header_policy_default() {
        assert_eq!(HeaderPolicy::default(), HeaderPolicy::FirstRow);
    }

    #[test]
    fn test_is_synthesized() {
        assert!(HeaderPolicy::Synthesized.is_synthesized());
        assert!(!HeaderPolicy::FirstRow.is_synthesized());
    }
}
