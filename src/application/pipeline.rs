//! Build pipeline
//!
//! Drives one build phase end to end, the way a build tool invokes this
//! crate once per phase.
//!
//! ## Flow
//!
//! 1. Collect the phase's sources from its configured roots
//! 2. Assemble the phase classpath (test phase sees the main output first)
//! 3. Ensure the phase output directory exists
//! 4. Run the compile use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::compile::{CompileOptions, CompileResult, CompileUseCase};
use crate::config::BuildConfig;
use crate::domain::ports::{BuildEventSink, Compiler, FileSystem, NoopEventSink, SourceRepository};
use crate::domain::value_objects::{BuildPhase, Classpath};
use crate::error::{BuildError, BuildResult};

/// Per-phase driver around the compile use case
pub struct BuildPipeline<C, FS, SR>
where
    C: Compiler,
    FS: FileSystem + Clone,
    SR: SourceRepository,
{
    config: BuildConfig,
    sources: SR,
    file_system: FS,
    compile: CompileUseCase<C, FS>,
}

impl<C, FS, SR> BuildPipeline<C, FS, SR>
where
    C: Compiler,
    FS: FileSystem + Clone,
    SR: SourceRepository,
{
    pub fn new(config: BuildConfig, sources: SR, compiler: C, file_system: FS) -> Self {
        let compile = CompileUseCase::new(compiler, file_system.clone());
        Self {
            config,
            sources,
            file_system,
            compile,
        }
    }

    /// Run one phase
    pub fn run(&self, phase: BuildPhase) -> BuildResult<CompileResult> {
        self.run_with_events(phase, Arc::new(NoopEventSink))
    }

    /// Run one phase with event reporting
    pub fn run_with_events(
        &self,
        phase: BuildPhase,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> BuildResult<CompileResult> {
        let roots = match phase {
            BuildPhase::Main => &self.config.source_dirs,
            BuildPhase::Test => &self.config.test_source_dirs,
        };
        let sources = self
            .sources
            .collect(roots)
            .map_err(|err| BuildError::SourceScan {
                message: err.to_string(),
            })?;

        let output_dir = self.output_dir(phase);
        // The loader refuses locations that do not exist, so every directory
        // that may appear on a phase classpath is created up front.
        self.ensure_dir(&output_dir)?;

        let mut classpath: Classpath = self.config.classpath.iter().cloned().collect();
        if phase.is_test() {
            let main_output = self.output_dir(BuildPhase::Main);
            self.ensure_dir(&main_output)?;
            // Freshly built main classes must win over configured entries.
            classpath.prepend(main_output);
        }

        let options = CompileOptions::new(output_dir)
            .with_sources(sources)
            .with_classpath(classpath)
            .with_compiler_options(self.config.compiler.clone());
        self.compile.execute_with_events(&options, event_sink)
    }

    fn output_dir(&self, phase: BuildPhase) -> PathBuf {
        match phase {
            BuildPhase::Main => self.config.output_dir.clone(),
            BuildPhase::Test => self.config.test_output_dir.clone(),
        }
    }

    fn ensure_dir(&self, dir: &Path) -> BuildResult<()> {
        self.file_system
            .create_dir_all(dir)
            .map_err(|source| BuildError::ArtifactWrite {
                path: dir.to_path_buf(),
                source,
            })
    }
}
