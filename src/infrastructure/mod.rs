//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (LocalFs)
//! - `loader/` - Classloading contexts (LoadingContext)
//! - `repositories/` - Source discovery (FsSourceRepository)
//! - `events/` - Event sinks (Console, Json)

pub mod events;
pub mod fs;
pub mod loader;
pub mod repositories;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use loader::LoadingContext;
pub use repositories::FsSourceRepository;
