//! Classloading contexts
//!
//! Per-run resolution scopes seeded with the build classpath.

mod context;

pub use context::LoadingContext;
