//! SourceRepository port - source file discovery
//!
//! How the source set reaches a compile run: a repository walks the
//! configured source roots and collects compilable files.

use std::path::PathBuf;

use crate::domain::value_objects::SourceSet;

/// Collects the source files of one build phase
pub trait SourceRepository {
    /// Gather every compilable file under the given roots
    ///
    /// A root that does not exist contributes nothing; a phase without a
    /// source tree is a valid, empty phase.
    fn collect(&self, roots: &[PathBuf]) -> anyhow::Result<SourceSet>;
}
