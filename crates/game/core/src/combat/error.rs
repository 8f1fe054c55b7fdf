use crate::env::{ArmorSpec, WeaponSpec};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipmentSlot, Unit};

/// Precondition violations raised by unit actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("{unit} has no {slot} equipped")]
    Unequipped { unit: String, slot: EquipmentSlot },
}

impl CombatError {
    pub(crate) fn unequipped(unit: &Unit, slot: EquipmentSlot) -> Self {
        Self::Unequipped {
            unit: unit.name().to_owned(),
            slot,
        }
    }
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unequipped { .. } => "COMBAT_UNEQUIPPED",
        }
    }
}

/// Weapon and armor of a fully equipped unit.
pub(crate) fn loadout(unit: &Unit) -> Result<(&WeaponSpec, &ArmorSpec), CombatError> {
    match (unit.weapon(), unit.armor()) {
        (Some(weapon), Some(armor)) => Ok((weapon, armor)),
        (None, _) => Err(CombatError::unequipped(unit, EquipmentSlot::Weapon)),
        (_, None) => Err(CombatError::unequipped(unit, EquipmentSlot::Armor)),
    }
}
