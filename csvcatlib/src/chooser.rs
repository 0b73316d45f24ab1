//! Interactive file selection seam.
//!
//! The combining pipeline works on explicit paths; when the caller has
//! none, it asks a [`FileChooser`] for them. Keeping the chooser behind
//! a trait keeps this library free of display dependencies and lets
//! tests drive the selection deterministically.

use std::path::PathBuf;

use crate::Result;

/// A source of interactively chosen input files.
pub trait FileChooser {
    /// Ask the user to choose zero or more input files.
    ///
    /// Blocks until the user confirms or dismisses the selection.
    /// Dismissal is not an error: implementations return an empty list
    /// and leave the decision to the caller. An implementation that has
    /// no way to present a selection UI at all returns
    /// `CsvcatError::ChooserUnavailable`.
    fn choose_files(&self) -> Result<Vec<PathBuf>>;
}

/// A chooser that returns a fixed list of paths.
///
/// Useful in tests and for headless callers that already know the
/// selection. An empty list behaves like a dismissed dialog.
#[derive(Debug, Clone, Default)]
pub struct StaticChooser {
    paths: Vec<PathBuf>,
}

impl StaticChooser {
    /// Create a chooser that always returns `paths`
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl FileChooser for StaticChooser {
    fn choose_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.paths.clone())
    }
}
