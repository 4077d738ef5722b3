//! File System Source Repository
//!
//! Collects `.mcl` source files by walking the configured source roots.

use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::domain::ports::SourceRepository;
use crate::domain::value_objects::SourceSet;

/// Extension of MCL source files
const SOURCE_EXTENSION: &str = "mcl";

/// Source repository that walks the file system
pub struct FsSourceRepository {
    extension: String,
}

impl FsSourceRepository {
    /// Create a repository collecting `.mcl` files
    pub fn new() -> Self {
        Self {
            extension: SOURCE_EXTENSION.to_string(),
        }
    }

    /// Collect a different extension (stub/generated source trees)
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for FsSourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRepository for FsSourceRepository {
    fn collect(&self, roots: &[PathBuf]) -> anyhow::Result<SourceSet> {
        let mut sources = SourceSet::new();
        for root in roots {
            // A phase without a source tree is a valid, empty phase.
            if !root.is_dir() {
                continue;
            }
            // Source scanning must see everything; VCS ignore files do not
            // apply to a compile input set.
            for entry in WalkBuilder::new(root).standard_filters(false).build() {
                let entry = entry?;
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                let matches = entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.extension);
                if is_file && matches {
                    sources.insert(entry.into_path());
                }
            }
        }
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn put_source(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "class Placeholder {}").unwrap();
        path
    }

    #[test]
    fn collects_only_mcl_files() {
        let dir = tempdir().unwrap();
        let hello = put_source(dir.path(), "pkg/Hello.mcl");
        put_source(dir.path(), "pkg/notes.txt");

        let repo = FsSourceRepository::new();
        let sources = repo.collect(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(sources.len(), 1);
        assert!(sources.contains(&hello));
    }

    #[test]
    fn walks_nested_directories() {
        let dir = tempdir().unwrap();
        put_source(dir.path(), "a/A.mcl");
        put_source(dir.path(), "a/b/c/B.mcl");

        let repo = FsSourceRepository::new();
        let sources = repo.collect(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn missing_root_contributes_nothing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-tree");

        let repo = FsSourceRepository::new();
        let sources = repo.collect(&[missing]).unwrap();

        assert!(sources.is_empty());
    }

    #[test]
    fn overlapping_roots_deduplicate() {
        let dir = tempdir().unwrap();
        put_source(dir.path(), "pkg/Hello.mcl");
        let root = dir.path().to_path_buf();

        let repo = FsSourceRepository::new();
        let sources = repo.collect(&[root.clone(), root]).unwrap();

        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn custom_extension_is_honored() {
        let dir = tempdir().unwrap();
        put_source(dir.path(), "gen/Stub.mclgen");
        put_source(dir.path(), "gen/Real.mcl");

        let repo = FsSourceRepository::with_extension("mclgen");
        let sources = repo.collect(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(sources.len(), 1);
    }
}
