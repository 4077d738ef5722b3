//! ResolutionScope port - symbol resolution against library locations
//!
//! A scope resolves fully-qualified names against the library locations
//! registered with it, falling back to a parent scope. Scopes form a
//! parent/child lineage: the driver owns a root scope and derives one child
//! per compile run.

use std::path::PathBuf;

use crate::domain::value_objects::ClassName;

/// One resolution scope in a parent/child lineage
pub trait ResolutionScope: Send + Sync {
    /// Resolve a name to the library location that provides it
    ///
    /// Own registrations are consulted first, in registration order; a miss
    /// delegates to the parent scope.
    fn locate(&self, name: &ClassName) -> Option<PathBuf>;
}
