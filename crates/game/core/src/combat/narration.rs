//! Human-readable text for action outcomes.
//!
//! Player lines talk about "the opponent"; enemy lines address the player
//! directly.

use crate::state::Role;

use super::ActionEffect;

pub const SKILL_ALREADY_USED: &str = "The skill has already been used.";

pub fn weapon_strike(
    role: Role,
    attacker: &str,
    weapon: &str,
    target_armor: &str,
    effect: ActionEffect,
) -> String {
    match (role, effect) {
        (Role::Player, ActionEffect::Landed { damage }) => format!(
            "{attacker} swings the {weapon}, pierces the opponent's {target_armor} and deals {damage:.1} damage."
        ),
        (Role::Enemy, ActionEffect::Landed { damage }) => format!(
            "{attacker} swings the {weapon}, pierces your {target_armor} and deals you {damage:.1} damage."
        ),
        (Role::Player, ActionEffect::Absorbed) => format!(
            "{attacker} swings the {weapon}, but the opponent's {target_armor} stops the blow."
        ),
        (Role::Enemy, ActionEffect::Absorbed) => {
            format!("{attacker} swings the {weapon}, but your {target_armor} stops the blow.")
        }
        (_, ActionEffect::InsufficientStamina) => {
            format!("{attacker} tried to use the {weapon}, but was too exhausted.")
        }
        (_, ActionEffect::SkillAlreadyUsed) => SKILL_ALREADY_USED.to_owned(),
    }
}

pub fn skill(role: Role, user: &str, skill: &str, effect: ActionEffect) -> String {
    match (role, effect) {
        (Role::Player, ActionEffect::Landed { damage }) => {
            format!("{user} uses {skill} and deals {damage:.1} damage to the opponent.")
        }
        (Role::Enemy, ActionEffect::Landed { damage }) => {
            format!("{user} uses {skill} and deals you {damage:.1} damage.")
        }
        (_, ActionEffect::Absorbed) => format!("{user} uses {skill}, but it leaves no mark."),
        (_, ActionEffect::InsufficientStamina) => {
            format!("{user} tried to use {skill}, but was too exhausted.")
        }
        (_, ActionEffect::SkillAlreadyUsed) => SKILL_ALREADY_USED.to_owned(),
    }
}
