//! Domain Entities
//!
//! - `CompiledClass` - one compiled artifact produced by the compiler
//! - `CompilationResult` - everything one compiler run produced

mod compilation;
mod compiled_class;

pub use compilation::CompilationResult;
pub use compiled_class::CompiledClass;
