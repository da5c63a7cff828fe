//! Repository paths and object-storage naming for playing-with-gan.
//!
//! The entry point is [`Registry`]: an immutable record of the repository
//! root, its temp directory, the credentials profile and the artifact bucket,
//! built once at start-up and passed by reference to whatever needs it.

pub mod config;
pub mod package;
pub mod registry;
pub mod repo_root;
pub mod storage;

pub use config::{ConfigError, Result, Settings};
pub use registry::Registry;
pub use storage::StorageLocation;
