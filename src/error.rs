//! Error types for mclbuild
//!
//! Uses `thiserror` for library errors. Every failure kind surfaces directly
//! to the caller; nothing is retried or recovered locally.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for mclbuild operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for mclbuild operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// The compiler could not tokenize a source file
    #[error("lexical error in {file}: {message}")]
    Lexical { file: PathBuf, message: String },

    /// The compiler could not parse a source file
    #[error("syntax error in {file}: {message}")]
    Syntactic { file: PathBuf, message: String },

    /// The compiler accepted syntax but rejected meaning (unresolved symbol,
    /// type error, ...)
    #[error("semantic error in {file}: {message}")]
    Semantic { file: PathBuf, message: String },

    /// A classpath entry could not be registered as a library location
    #[error("cannot register classpath entry {entry}: {message}")]
    ClasspathEntry { entry: PathBuf, message: String },

    /// Directory creation or byte write failed for a compiled class
    #[error("failed to write {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A fully-qualified class name with empty or separator-bearing segments
    #[error("invalid class name '{name}'")]
    InvalidClassName { name: String },

    /// Source discovery failed while walking a source root
    #[error("failed to scan sources: {message}")]
    SourceScan { message: String },

    /// Invalid TOML in the build configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
