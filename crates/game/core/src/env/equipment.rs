//! Equipment catalog: weapons and armor looked up by name.

use super::{CatalogError, ensure_named, ensure_non_negative, ensure_unique};

/// Read-only access to the equipment catalog.
pub trait EquipmentOracle: Send + Sync {
    fn weapon(&self, name: &str) -> Option<&WeaponSpec>;

    fn armor(&self, name: &str) -> Option<&ArmorSpec>;

    /// Weapon names in catalog order.
    fn weapon_names(&self) -> Vec<&str>;

    /// Armor names in catalog order.
    fn armor_names(&self) -> Vec<&str>;
}

/// Weapon record.
///
/// Damage is not stored: it is sampled uniformly from
/// `[min_damage, max_damage]` on every hit (see [`crate::combat::roll_weapon_damage`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub id: u32,
    pub name: String,
    pub min_damage: f32,
    pub max_damage: f32,
    /// Stamina the attacker pays per swing, before the class multiplier.
    pub stamina_per_hit: f32,
}

impl WeaponSpec {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        min_damage: f32,
        max_damage: f32,
        stamina_per_hit: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            min_damage,
            max_damage,
            stamina_per_hit,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_named("weapon", &self.name)?;
        ensure_non_negative("weapon", &self.name, "min_damage", self.min_damage)?;
        ensure_non_negative("weapon", &self.name, "max_damage", self.max_damage)?;
        ensure_non_negative("weapon", &self.name, "stamina_per_hit", self.stamina_per_hit)?;
        if self.min_damage > self.max_damage {
            return Err(CatalogError::InvertedDamageRange {
                name: self.name.clone(),
                min: self.min_damage,
                max: self.max_damage,
            });
        }
        Ok(())
    }
}

/// Armor record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorSpec {
    pub id: u32,
    pub name: String,
    pub defence: f32,
    /// Stamina the wearer pays each time the armor mitigates a blow.
    pub stamina_per_turn: f32,
}

impl ArmorSpec {
    pub fn new(id: u32, name: impl Into<String>, defence: f32, stamina_per_turn: f32) -> Self {
        Self {
            id,
            name: name.into(),
            defence,
            stamina_per_turn,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_named("armor", &self.name)?;
        ensure_non_negative("armor", &self.name, "defence", self.defence)?;
        ensure_non_negative("armor", &self.name, "stamina_per_turn", self.stamina_per_turn)
    }
}

/// Validated, immutable equipment catalog.
#[derive(Clone, Debug, Default)]
pub struct EquipmentCatalog {
    weapons: Vec<WeaponSpec>,
    armors: Vec<ArmorSpec>,
}

impl EquipmentCatalog {
    /// Builds a catalog, rejecting empty lists, duplicate names and
    /// malformed numbers.
    pub fn new(weapons: Vec<WeaponSpec>, armors: Vec<ArmorSpec>) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::Empty { kind: "weapon" });
        }
        if armors.is_empty() {
            return Err(CatalogError::Empty { kind: "armor" });
        }

        for weapon in &weapons {
            weapon.validate()?;
        }
        for armor in &armors {
            armor.validate()?;
        }
        ensure_unique("weapon", weapons.iter().map(|weapon| weapon.name.as_str()))?;
        ensure_unique("armor", armors.iter().map(|armor| armor.name.as_str()))?;

        Ok(Self { weapons, armors })
    }

    pub fn weapons(&self) -> &[WeaponSpec] {
        &self.weapons
    }

    pub fn armors(&self) -> &[ArmorSpec] {
        &self.armors
    }
}

impl EquipmentOracle for EquipmentCatalog {
    fn weapon(&self, name: &str) -> Option<&WeaponSpec> {
        self.weapons.iter().find(|weapon| weapon.name == name)
    }

    fn armor(&self, name: &str) -> Option<&ArmorSpec> {
        self.armors.iter().find(|armor| armor.name == name)
    }

    fn weapon_names(&self) -> Vec<&str> {
        self.weapons.iter().map(|weapon| weapon.name.as_str()).collect()
    }

    fn armor_names(&self) -> Vec<&str> {
        self.armors.iter().map(|armor| armor.name.as_str()).collect()
    }
}
