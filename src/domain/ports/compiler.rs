//! Compiler port - the external compiler service
//!
//! Lexical analysis, parsing, semantic analysis, and bytecode generation are
//! all behind this boundary. The driver hands over an isolated resolution
//! scope and the source set, then blocks until the service returns.

use crate::domain::entities::CompilationResult;
use crate::domain::ports::ResolutionScope;
use crate::domain::value_objects::{CompilerOptions, SourceSet};
use crate::error::BuildResult;

/// The opaque compiler service
///
/// Fails with the lexical/syntactic/semantic kinds of [`crate::BuildError`]
/// on invalid input; otherwise returns zero or more compiled classes.
pub trait Compiler: Send + Sync {
    fn compile(
        &self,
        scope: &dyn ResolutionScope,
        sources: &SourceSet,
        options: &CompilerOptions,
    ) -> BuildResult<CompilationResult>;
}
