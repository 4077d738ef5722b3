//! Mclbuild - build-phase driver for the MCL compiler
//!
//! Mclbuild integrates an external MCL compiler into a build tool: it
//! discovers `.mcl` sources, builds an isolated classloading context seeded
//! with the build classpath, delegates compilation to the compiler service,
//! and writes the resulting class files under a package-derived layout in
//! the output directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildPipeline, CompileOptions, CompileResult, CompileUseCase};
pub use config::{BuildConfig, ConfigWarning, CONFIG_FILE_NAME};
pub use domain::entities::{CompilationResult, CompiledClass};
pub use domain::ports::{
    BuildEvent, BuildEventSink, Compiler, FileSystem, FsError, FsResult, NoopEventSink,
    ResolutionScope, SourceRepository,
};
pub use domain::value_objects::{BuildPhase, ClassName, Classpath, CompilerOptions, SourceSet};
pub use error::{BuildError, BuildResult};
pub use infrastructure::{
    ConsoleEventSink, FsSourceRepository, JsonEventSink, LoadingContext, LocalFs,
};
