//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use workspace::{PondRepository, Workspace};
