//! Shared test fixtures
#![allow(dead_code)]

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mclbuild::{
    BuildError, BuildResult, ClassName, CompilationResult, CompiledClass, Compiler,
    CompilerOptions, ResolutionScope, SourceSet,
};

/// Compiler stub that emits one class per source file
///
/// The class name is `<package>.<file stem>` and the payload is the
/// configured bytes. Optionally records where the scope resolves a watched
/// name, for precedence assertions. Cloned handles share the recording, so a
/// caller can keep one while the use case owns the other.
#[derive(Clone)]
pub struct FixtureCompiler {
    package: String,
    payload: Vec<u8>,
    watch: Option<ClassName>,
    located: Arc<Mutex<Option<PathBuf>>>,
}

impl FixtureCompiler {
    pub fn new(package: &str, payload: &[u8]) -> Self {
        Self {
            package: package.to_string(),
            payload: payload.to_vec(),
            watch: None,
            located: Arc::new(Mutex::new(None)),
        }
    }

    /// Record where the scope resolves `name` during compilation
    pub fn watching(mut self, name: &str) -> Self {
        self.watch = Some(ClassName::new(name).unwrap());
        self
    }

    pub fn located(&self) -> Option<PathBuf> {
        self.located.lock().unwrap().clone()
    }
}

impl Compiler for FixtureCompiler {
    fn compile(
        &self,
        scope: &dyn ResolutionScope,
        sources: &SourceSet,
        _options: &CompilerOptions,
    ) -> BuildResult<CompilationResult> {
        if let Some(watch) = &self.watch {
            *self.located.lock().unwrap() = scope.locate(watch);
        }
        let classes = sources
            .iter()
            .map(|source| {
                let stem = source
                    .file_stem()
                    .expect("source file has a stem")
                    .to_string_lossy();
                let name = ClassName::new(format!("{}.{}", self.package, stem)).unwrap();
                CompiledClass::new(name, self.payload.clone())
            })
            .collect();
        Ok(CompilationResult::new(classes))
    }
}

/// Compiler stub that rejects everything semantically
pub struct RefusingCompiler;

impl Compiler for RefusingCompiler {
    fn compile(
        &self,
        _scope: &dyn ResolutionScope,
        sources: &SourceSet,
        _options: &CompilerOptions,
    ) -> BuildResult<CompilationResult> {
        let file = sources
            .iter()
            .next()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Err(BuildError::Semantic {
            file,
            message: "unresolved symbol 'Gadget'".to_string(),
        })
    }
}

/// Writer backed by a shared buffer, for capturing sink output
pub struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capture() -> (SharedWriter, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    (SharedWriter(buffer.clone()), buffer)
}

pub fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
}

/// Create a placeholder source file under `root`
pub fn put_source(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "class Placeholder {}").unwrap();
    path
}

/// Create a class file inside a library directory
pub fn put_lib_class(lib: &Path, name: &str, bytes: &[u8]) {
    let path = lib.join(ClassName::new(name).unwrap().relative_path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, bytes).unwrap();
}
