//! ClassName value object - a fully-qualified class name
//!
//! Dot-separated hierarchical identifier for a compiled artifact
//! (`pkg.sub.Widget`). The on-disk location of the artifact is derived from
//! it deterministically: segment separators become path separators and the
//! `.class` suffix is appended.

use std::fmt;
use std::path::PathBuf;

use crate::error::{BuildError, BuildResult};

/// File extension of compiled artifacts
const CLASS_EXTENSION: &str = "class";

/// A validated fully-qualified class name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    /// Create a class name, rejecting empty segments and path separators
    pub fn new(name: impl Into<String>) -> BuildResult<Self> {
        let name = name.into();
        let malformed = name.is_empty()
            || name.contains(['/', '\\'])
            || name.split('.').any(|segment| segment.is_empty());
        if malformed {
            return Err(BuildError::InvalidClassName { name });
        }
        Ok(Self(name))
    }

    /// The dot-separated name as written by the compiler
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name segments, outermost package first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The artifact path relative to an output directory
    ///
    /// `a.b.Widget` maps to `a/b/Widget.class` (separator-correct for the
    /// host platform).
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.segments().collect();
        path.set_extension(CLASS_EXTENSION);
        path
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
