//! SourceSet value object - the input files of one compile run
//!
//! Unordered and unique; iteration order is the sorted path order so a run
//! over the same inputs is deterministic.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The set of source files handed to the compiler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet(BTreeSet<PathBuf>);

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source file; returns false if it was already present
    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.0.insert(path.into())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }
}

impl FromIterator<PathBuf> for SourceSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
