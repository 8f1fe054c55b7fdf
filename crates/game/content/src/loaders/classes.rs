//! Unit class loader.

use std::path::Path;

use arena_core::{ClassRegistry, UnitClassSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for unit classes from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load and validate a RON list of [`UnitClassSpec`].
    pub fn load(path: &Path) -> LoadResult<ClassRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ClassRegistry> {
        let classes: Vec<UnitClassSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class RON: {}", e))?;

        let count = classes.len();
        let registry = ClassRegistry::new(classes)
            .map_err(|e| anyhow::anyhow!("Invalid class registry: {}", e))?;

        tracing::debug!(classes = count, "class registry loaded");
        Ok(registry)
    }
}
