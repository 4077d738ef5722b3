//! Compile Options
//!
//! Configuration types for one compile run.

use std::path::PathBuf;

use crate::domain::value_objects::{Classpath, CompilerOptions, SourceSet};

/// Options for the compile use case
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Source files to compile
    pub sources: SourceSet,
    /// Library locations, registration order is resolution precedence
    pub classpath: Classpath,
    /// Root directory for compiled class files
    pub output_dir: PathBuf,
    /// Settings handed to the compiler service
    pub compiler_options: CompilerOptions,
}

impl CompileOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sources: SourceSet::new(),
            classpath: Classpath::new(),
            output_dir: output_dir.into(),
            compiler_options: CompilerOptions::default(),
        }
    }

    pub fn with_sources(mut self, sources: SourceSet) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_classpath(mut self, classpath: Classpath) -> Self {
        self.classpath = classpath;
        self
    }

    pub fn with_compiler_options(mut self, compiler_options: CompilerOptions) -> Self {
        self.compiler_options = compiler_options;
        self
    }
}
