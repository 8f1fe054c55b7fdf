//! Error types for the battle engine.

use crate::combat::CombatError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipmentSlot, Role};

/// Errors surfaced by [`super::Battle`].
///
/// Acting on a battle that is not running is not an error; see
/// [`super::TurnResponse::Inactive`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("{unit} cannot enter the arena without a {slot}")]
    Unequipped { unit: String, slot: EquipmentSlot },

    #[error("{unit} is a {found} unit and cannot take the {expected} seat")]
    RoleMismatch {
        unit: String,
        expected: Role,
        found: Role,
    },

    #[error("battle is running without combatants")]
    MissingCombatants,

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unequipped { .. } | Self::RoleMismatch { .. } => ErrorSeverity::Validation,
            Self::MissingCombatants => ErrorSeverity::Internal,
            Self::Combat(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unequipped { .. } => "BATTLE_UNEQUIPPED",
            Self::RoleMismatch { .. } => "BATTLE_ROLE_MISMATCH",
            Self::MissingCombatants => "BATTLE_MISSING_COMBATANTS",
            Self::Combat(error) => error.error_code(),
        }
    }
}
