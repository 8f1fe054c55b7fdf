//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use arena_core::{ArenaConfig, ClassRegistry, EquipmentCatalog};

use crate::loaders::{ClassLoader, ConfigLoader, EquipmentLoader, LoadResult};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── equipment.json   (required)
/// ├── classes.ron      (optional, built-in classes otherwise)
/// └── config.toml      (optional, defaults otherwise)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const EQUIPMENT_FILE: &'static str = "equipment.json";
    pub const CLASSES_FILE: &'static str = "classes.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the equipment catalog from `equipment.json`.
    pub fn load_equipment(&self) -> LoadResult<EquipmentCatalog> {
        EquipmentLoader::load(&self.data_dir.join(Self::EQUIPMENT_FILE))
    }

    /// Load unit classes from `classes.ron`, or the built-in set when the
    /// file does not exist.
    pub fn load_classes(&self) -> LoadResult<ClassRegistry> {
        let path = self.data_dir.join(Self::CLASSES_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no class file, using built-in classes");
            return Ok(crate::builtin::default_classes()?);
        }
        ClassLoader::load(&path)
    }

    /// Load arena rules from `config.toml`, or defaults when the file does
    /// not exist.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(ArenaConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
