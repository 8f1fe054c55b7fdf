//! Content loaders for reading arena data from files.
//!
//! Each loader parses one file format into `arena-core` types and runs the
//! same validation the in-memory constructors do, so malformed content is
//! rejected at startup rather than mid-battle.

pub mod classes;
pub mod config;
pub mod equipment;
pub mod factory;

pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use equipment::{EquipmentFile, EquipmentLoader};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
