//! Equipment catalog loader.

use std::path::Path;

use arena_core::{ArmorSpec, EquipmentCatalog, WeaponSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentFile {
    pub weapons: Vec<WeaponSpec>,
    pub armors: Vec<ArmorSpec>,
}

/// Loader for the equipment catalog from JSON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load and validate the equipment catalog from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing an [`EquipmentFile`]
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate an equipment document already in memory.
    pub fn parse(content: &str) -> LoadResult<EquipmentCatalog> {
        let file: EquipmentFile = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment JSON: {}", e))?;

        let catalog = EquipmentCatalog::new(file.weapons, file.armors)
            .map_err(|e| anyhow::anyhow!("Invalid equipment catalog: {}", e))?;

        tracing::debug!(
            weapons = catalog.weapons().len(),
            armors = catalog.armors().len(),
            "equipment catalog loaded"
        );
        Ok(catalog)
    }
}
