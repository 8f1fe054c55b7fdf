//! Weapon attacks.

use crate::config::ArenaConfig;
use crate::env::Dice;
use crate::state::{Role, Unit};

use super::damage::{StrikeSpec, resolve_strike};
use super::error::loadout;
use super::outcome::Vitals;
use super::{ActionEffect, ActionKind, ActionOutcome, CombatError, narration};

impl Unit {
    /// True when current stamina covers the weapon's swing cost.
    ///
    /// The check scales the unit's stamina by its class multiplier
    /// (`stamina × stamina_multiplier >= stamina_per_hit`).
    pub fn can_swing(&self) -> bool {
        self.weapon().is_some_and(|weapon| {
            self.stamina() * self.class().stamina_multiplier >= weapon.stamina_per_hit
        })
    }

    /// Attack `target`.
    ///
    /// Both units must be fully equipped. An enemy first rolls to fire its
    /// skill instead (see [`Unit::wants_skill`]). A swing the attacker
    /// cannot afford is a narrated no-op: no stamina is taken.
    pub fn hit(
        &mut self,
        target: &mut Unit,
        dice: &mut Dice<'_>,
        config: &ArenaConfig,
    ) -> Result<ActionOutcome, CombatError> {
        loadout(self)?;
        loadout(target)?;

        if self.role() == Role::Enemy && self.wants_skill(dice, config) {
            tracing::debug!(unit = %self.name(), "enemy fires its skill");
            return self.use_skill(target, dice);
        }

        self.weapon_attack(target, dice)
    }

    /// Enemy skill trigger: skill unused, affordable, and a roll in
    /// `[0, skill_roll_sides)` below `enemy_skill_chance`.
    ///
    /// No roll is made when the first two conditions fail.
    pub fn wants_skill(&self, dice: &mut Dice<'_>, config: &ArenaConfig) -> bool {
        !self.skill_used()
            && self.can_afford_skill()
            && dice.roll_below(config.skill_roll_sides) < config.enemy_skill_chance
    }

    fn weapon_attack(
        &mut self,
        target: &mut Unit,
        dice: &mut Dice<'_>,
    ) -> Result<ActionOutcome, CombatError> {
        let weapon_name = loadout(self)?.0.name.clone();
        let armor_name = loadout(target)?.1.name.clone();
        let vitals = Vitals::capture(self, target);

        let effect = if self.can_swing() {
            resolve_strike(self, target, dice, StrikeSpec::weapon())?;
            vitals.impact(target)
        } else {
            ActionEffect::InsufficientStamina
        };

        let text = narration::weapon_strike(
            self.role(),
            self.name(),
            &weapon_name,
            &armor_name,
            effect,
        );
        tracing::debug!(unit = %self.name(), ?effect, "weapon attack resolved");
        Ok(vitals.finish(self, target, ActionKind::Hit, effect, false, text))
    }
}
