//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The compiler service and the classloading mechanism are external
//! collaborators consumed only through these ports; infrastructure provides
//! the rest.

pub mod build_events;
pub mod compiler;
pub mod file_system;
pub mod resolution;
pub mod source_repository;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use compiler::Compiler;
pub use file_system::{FileSystem, FsError, FsResult};
pub use resolution::ResolutionScope;
pub use source_repository::SourceRepository;
