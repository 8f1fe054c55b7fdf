//! Equipment slots for a unit.

use crate::env::{ArmorSpec, WeaponSpec};

/// Identifies an equipment slot, mostly for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// What a unit currently wears.
///
/// Both slots must be filled before the unit can enter a battle. Equipping
/// replaces the previous item unconditionally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    pub weapon: Option<WeaponSpec>,
    pub armor: Option<ArmorSpec>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips a weapon, returning the previously equipped one if any.
    pub fn equip_weapon(&mut self, weapon: WeaponSpec) -> Option<WeaponSpec> {
        self.weapon.replace(weapon)
    }

    /// Equips armor, returning the previously equipped one if any.
    pub fn equip_armor(&mut self, armor: ArmorSpec) -> Option<ArmorSpec> {
        self.armor.replace(armor)
    }

    /// First empty slot, if any.
    pub fn missing_slot(&self) -> Option<EquipmentSlot> {
        if self.weapon.is_none() {
            Some(EquipmentSlot::Weapon)
        } else if self.armor.is_none() {
            Some(EquipmentSlot::Armor)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipping_replaces_previous_item() {
        let mut equipment = Equipment::empty();
        assert_eq!(equipment.missing_slot(), Some(EquipmentSlot::Weapon));

        assert!(equipment
            .equip_weapon(WeaponSpec::new(1, "knife", 1.0, 2.0, 1.0))
            .is_none());
        let previous = equipment.equip_weapon(WeaponSpec::new(2, "axe", 3.0, 4.0, 2.0));
        assert_eq!(previous.map(|w| w.name), Some("knife".to_owned()));
        assert_eq!(equipment.missing_slot(), Some(EquipmentSlot::Armor));

        equipment.equip_armor(ArmorSpec::new(1, "shirt", 0.5, 0.5));
        assert_eq!(equipment.missing_slot(), None);
    }
}
