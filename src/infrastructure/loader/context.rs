//! LoadingContext - an isolated resolution scope for one compile run
//!
//! Owns the library locations registered with it, in registration order, and
//! holds a shared reference to a parent scope for resolution fallback. A
//! context is built fresh per run and discarded afterwards; nothing is cached
//! across runs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::ResolutionScope;
use crate::domain::value_objects::ClassName;
use crate::error::{BuildError, BuildResult};

/// One scope in the classloading lineage
pub struct LoadingContext {
    parent: Option<Arc<dyn ResolutionScope>>,
    locations: Vec<PathBuf>,
}

impl LoadingContext {
    /// A scope with no parent and no registrations
    pub fn root() -> Self {
        Self {
            parent: None,
            locations: Vec::new(),
        }
    }

    /// A fresh scope that falls back to `parent` on resolution misses
    pub fn child_of(parent: Arc<dyn ResolutionScope>) -> Self {
        Self {
            parent: Some(parent),
            locations: Vec::new(),
        }
    }

    /// Register a library location at the lowest precedence position
    ///
    /// The entry must name something that exists on disk; an unusable entry
    /// aborts before any compilation is attempted.
    pub fn add_library_location(&mut self, location: &Path) -> BuildResult<()> {
        if location.as_os_str().is_empty() {
            return Err(BuildError::ClasspathEntry {
                entry: location.to_path_buf(),
                message: "empty path".to_string(),
            });
        }
        if let Err(err) = std::fs::metadata(location) {
            return Err(BuildError::ClasspathEntry {
                entry: location.to_path_buf(),
                message: err.to_string(),
            });
        }
        self.locations.push(location.to_path_buf());
        Ok(())
    }

    /// Registered locations in registration order
    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }
}

impl ResolutionScope for LoadingContext {
    fn locate(&self, name: &ClassName) -> Option<PathBuf> {
        let relative = name.relative_path();
        for location in &self.locations {
            // Archive entries are opaque here; reading their indexes is the
            // classloading mechanism's concern.
            if location.is_dir() && location.join(&relative).is_file() {
                return Some(location.clone());
            }
        }
        self.parent.as_ref().and_then(|parent| parent.locate(name))
    }
}
