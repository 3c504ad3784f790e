//! Content loaders for reading combat data from files.
//!
//! Each loader can read from a path, from an in-memory string, or from the
//! defaults embedded at build time.

pub mod config;
pub mod profiles;

pub use config::ConfigLoader;
pub use profiles::{AttackProfileRegistry, ProfileLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
