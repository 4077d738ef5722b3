//! Configuration module for mclbuild
//!
//! Binds build parameters from `mclbuild.toml`:
//! source roots, output directories, classpath entries, and the `[compiler]`
//! section. Every key has a built-in default, so an absent file or an empty
//! one is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CompilerOptions;
use crate::error::{BuildError, BuildResult};

/// File name of the build configuration
pub const CONFIG_FILE_NAME: &str = "mclbuild.toml";

/// Build parameters for both compile phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Roots of production sources
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<PathBuf>,

    /// Roots of test sources
    #[serde(default = "default_test_source_dirs")]
    pub test_source_dirs: Vec<PathBuf>,

    /// Output directory of the main phase
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Output directory of the test phase
    #[serde(default = "default_test_output_dir")]
    pub test_output_dir: PathBuf,

    /// Library locations shared by both phases
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    /// Settings handed to the compiler service
    #[serde(default)]
    pub compiler: CompilerOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            test_source_dirs: default_test_source_dirs(),
            output_dir: default_output_dir(),
            test_output_dir: default_test_output_dir(),
            classpath: Vec::new(),
            compiler: CompilerOptions::default(),
        }
    }
}

fn default_source_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("src/main/mcl")]
}

fn default_test_source_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("src/test/mcl")]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target/classes")
}

fn default_test_output_dir() -> PathBuf {
    PathBuf::from("target/test-classes")
}

/// Non-fatal configuration warning surfaced to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl BuildConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BuildResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> BuildResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| BuildError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    line: find_line_number(&content, &key),
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from `mclbuild.toml` under the project root, or fall back to
    /// defaults
    pub fn load_or_default(project_root: &Path) -> Self {
        let path = project_root.join(CONFIG_FILE_NAME);
        if path.exists() {
            if let Ok(config) = Self::load(&path) {
                return config;
            }
        }
        Self::default()
    }
}

/// Best-effort line lookup for warning messages
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|index| index + 1)
}
