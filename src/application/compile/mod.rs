//! Compile Module
//!
//! Orchestrates one compile run.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`CompileOptions`)
//! - `result` - Result types (`CompileResult`)
//! - `use_case` - Core use case logic (`CompileUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use mclbuild::application::compile::{CompileOptions, CompileUseCase};
//!
//! let use_case = CompileUseCase::new(compiler, LocalFs::new());
//! let result = use_case.execute(&CompileOptions::new("target/classes").with_sources(sources))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::CompileOptions;
pub use result::CompileResult;
pub use use_case::CompileUseCase;
