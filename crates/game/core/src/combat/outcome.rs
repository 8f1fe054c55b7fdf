//! Structured results of unit actions.

use crate::state::{Role, Unit, round_tenths};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Hit,
    Skill,
}

/// What an action did to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    /// The target lost `damage` health.
    Landed { damage: f32 },
    /// The action went through but armor left the target unhurt.
    Absorbed,
    /// The actor could not pay the stamina cost; nothing changed.
    InsufficientStamina,
    /// The skill was already spent this battle; nothing changed.
    SkillAlreadyUsed,
}

/// Everything an action changed, plus its narration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub actor: Role,
    pub kind: ActionKind,
    pub effect: ActionEffect,
    /// Target health after minus before (zero or negative).
    pub target_hp_delta: f32,
    pub actor_stamina_delta: f32,
    pub target_stamina_delta: f32,
    /// True when this action flipped the actor's skill to used.
    pub skill_consumed: bool,
    pub narration: String,
}

impl ActionOutcome {
    /// Health the target actually lost.
    pub fn damage_dealt(&self) -> f32 {
        match self.effect {
            ActionEffect::Landed { damage } => damage,
            _ => 0.0,
        }
    }
}

/// Health and stamina captured before an action.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Vitals {
    actor_stamina: f32,
    target_hp: f32,
    target_stamina: f32,
}

impl Vitals {
    pub(crate) fn capture(actor: &Unit, target: &Unit) -> Self {
        Self {
            actor_stamina: actor.stamina(),
            target_hp: target.hp(),
            target_stamina: target.stamina(),
        }
    }

    /// Classifies a completed strike by the health the target lost.
    pub(crate) fn impact(&self, target: &Unit) -> ActionEffect {
        let damage = round_tenths(self.target_hp - target.hp());
        if damage > 0.0 {
            ActionEffect::Landed { damage }
        } else {
            ActionEffect::Absorbed
        }
    }

    pub(crate) fn finish(
        self,
        actor: &Unit,
        target: &Unit,
        kind: ActionKind,
        effect: ActionEffect,
        skill_consumed: bool,
        narration: String,
    ) -> ActionOutcome {
        ActionOutcome {
            actor: actor.role(),
            kind,
            effect,
            target_hp_delta: round_tenths(target.hp() - self.target_hp),
            actor_stamina_delta: actor.stamina() - self.actor_stamina,
            target_stamina_delta: target.stamina() - self.target_stamina,
            skill_consumed,
            narration,
        }
    }
}
