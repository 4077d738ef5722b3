//! Compile Use Case
//!
//! Orchestrates one compile run:
//! 1. Fast-path exit when there is nothing to compile
//! 2. Build an isolated loading context seeded with the classpath
//! 3. Delegate to the compiler service
//! 4. Write every compiled class under its package-derived path
//! 5. Report a summary count
//!
//! Any compiler or I/O failure aborts the run and surfaces unchanged; the
//! write loop only starts after the compiler returns, so a failed compile
//! leaves the output directory untouched. Writes within one batch are not
//! transactional: artifacts written before a failing write remain on disk.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::entities::CompiledClass;
use crate::domain::ports::{
    BuildEvent, BuildEventSink, Compiler, FileSystem, NoopEventSink, ResolutionScope,
};
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::loader::LoadingContext;

use super::options::CompileOptions;
use super::result::CompileResult;

/// Compile use case - orchestrates one compile run
///
/// Parameterized by its ports for easy testing; the compiler service and the
/// file system are injected, never constructed here.
pub struct CompileUseCase<C, FS>
where
    C: Compiler,
    FS: FileSystem,
{
    compiler: C,
    file_system: FS,
    /// Parent of every per-run loading context
    root_scope: Arc<dyn ResolutionScope>,
    /// One compile at a time per instance: every per-run context shares the
    /// root scope lineage, and neither the compiler service nor the
    /// classloading mechanism is guaranteed safe for concurrent entry
    guard: Mutex<()>,
}

impl<C, FS> CompileUseCase<C, FS>
where
    C: Compiler,
    FS: FileSystem,
{
    pub fn new(compiler: C, file_system: FS) -> Self {
        Self::with_root_scope(compiler, file_system, Arc::new(LoadingContext::root()))
    }

    /// Use an existing scope as the parent of every per-run context
    pub fn with_root_scope(
        compiler: C,
        file_system: FS,
        root_scope: Arc<dyn ResolutionScope>,
    ) -> Self {
        Self {
            compiler,
            file_system,
            root_scope,
            guard: Mutex::new(()),
        }
    }

    /// Execute the compile run
    pub fn execute(&self, options: &CompileOptions) -> BuildResult<CompileResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the compile run with event reporting
    pub fn execute_with_events(
        &self,
        options: &CompileOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> BuildResult<CompileResult> {
        let _guard = self
            .guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if options.sources.is_empty() {
            event_sink.on_event(BuildEvent::SkippedNoSources);
            return Ok(CompileResult::skipped());
        }

        event_sink.on_event(BuildEvent::Started {
            source_count: options.sources.len(),
            output_dir: options.output_dir.clone(),
        });

        // Fresh context per run; discarded when this call returns.
        let mut context = LoadingContext::child_of(Arc::clone(&self.root_scope));
        for entry in options.classpath.iter() {
            context.add_library_location(entry)?;
        }

        let compilation =
            self.compiler
                .compile(&context, &options.sources, &options.compiler_options)?;
        event_sink.on_event(BuildEvent::Compiled {
            class_count: compilation.class_count(),
        });

        let mut result = CompileResult::new();
        result.class_count = compilation.class_count();
        for (index, class) in compilation.classes().iter().enumerate() {
            let path = self.write_class(&options.output_dir, class)?;
            if event_sink.wants_detailed_events() {
                event_sink.on_event(BuildEvent::ClassWritten {
                    index,
                    path: path.clone(),
                });
            }
            result.written.push(path);
        }

        event_sink.on_event(BuildEvent::Completed {
            class_count: result.class_count,
        });

        Ok(result)
    }

    /// Write one compiled class under its package-derived path
    fn write_class(&self, output_dir: &Path, class: &CompiledClass) -> BuildResult<PathBuf> {
        let path = output_dir.join(class.relative_path());
        if let Some(parent) = path.parent() {
            self.file_system
                .create_dir_all(parent)
                .map_err(|source| BuildError::ArtifactWrite {
                    path: path.clone(),
                    source,
                })?;
        }
        self.file_system
            .write_bytes(&path, class.bytes())
            .map_err(|source| BuildError::ArtifactWrite {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}
