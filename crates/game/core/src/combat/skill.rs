//! One-shot class skills.

use crate::env::{Dice, SkillEffect};
use crate::state::Unit;

use super::damage::{StrikeSpec, resolve_strike};
use super::error::loadout;
use super::outcome::Vitals;
use super::{ActionEffect, ActionKind, ActionOutcome, CombatError, narration};

impl Unit {
    /// True when current stamina covers the class skill's cost.
    pub fn can_afford_skill(&self) -> bool {
        self.stamina() >= self.class().skill.stamina_cost
    }

    /// Fire the class skill at `target`.
    ///
    /// - Already used: returns [`ActionEffect::SkillAlreadyUsed`], nothing changes.
    /// - Unaffordable: returns [`ActionEffect::InsufficientStamina`]; the skill
    ///   stays available.
    /// - Otherwise the skill is marked used and its cost paid before the
    ///   effect resolves, even if the effect ends up dealing no damage.
    pub fn use_skill(
        &mut self,
        target: &mut Unit,
        dice: &mut Dice<'_>,
    ) -> Result<ActionOutcome, CombatError> {
        let skill = self.class().skill.clone();
        let vitals = Vitals::capture(self, target);

        if self.skill_used() {
            let effect = ActionEffect::SkillAlreadyUsed;
            let text = narration::skill(self.role(), self.name(), &skill.name, effect);
            return Ok(vitals.finish(self, target, ActionKind::Skill, effect, false, text));
        }

        if !self.can_afford_skill() {
            let effect = ActionEffect::InsufficientStamina;
            let text = narration::skill(self.role(), self.name(), &skill.name, effect);
            return Ok(vitals.finish(self, target, ActionKind::Skill, effect, false, text));
        }

        if let SkillEffect::EmpoweredStrike { .. } = skill.effect {
            loadout(self)?;
            loadout(target)?;
        }

        self.mark_skill_used();
        self.spend_stamina(skill.stamina_cost);

        match skill.effect {
            SkillEffect::PiercingBlow { damage } => {
                target.get_damage(damage);
            }
            SkillEffect::EmpoweredStrike { bonus } => {
                resolve_strike(self, target, dice, StrikeSpec::empowered(bonus))?;
            }
        }

        let effect = vitals.impact(target);
        let text = narration::skill(self.role(), self.name(), &skill.name, effect);
        tracing::debug!(unit = %self.name(), skill = %skill.name, ?effect, "skill resolved");
        Ok(vitals.finish(self, target, ActionKind::Skill, effect, true, text))
    }
}
