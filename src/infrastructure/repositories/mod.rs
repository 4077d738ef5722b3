//! Repository implementations

mod sources;

pub use sources::FsSourceRepository;
