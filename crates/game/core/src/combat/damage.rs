//! Shared damage routine used by both roles and by weapon-based skills.

use crate::env::{Dice, WeaponSpec};
use crate::state::{Unit, round_tenths};

use super::CombatError;
use super::error::loadout;

/// Sample a weapon's damage uniformly in `[min_damage, max_damage]`,
/// rounded to one decimal.
///
/// Damage is never cached: every call draws a fresh value.
pub fn roll_weapon_damage(weapon: &WeaponSpec, dice: &mut Dice<'_>) -> f32 {
    let sample = dice.uniform(weapon.min_damage, weapon.max_damage);
    round_tenths(sample).clamp(weapon.min_damage, weapon.max_damage)
}

/// How a strike is paid for.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StrikeSpec {
    /// Charge the weapon's swing cost to the attacker.
    pub charge_weapon: bool,
    /// Flat damage added after the attack multiplier.
    pub bonus: f32,
}

impl StrikeSpec {
    pub(crate) const fn weapon() -> Self {
        Self {
            charge_weapon: true,
            bonus: 0.0,
        }
    }

    pub(crate) const fn empowered(bonus: f32) -> Self {
        Self {
            charge_weapon: false,
            bonus,
        }
    }
}

/// Numbers behind a resolved strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrikeReport {
    /// Sampled weapon damage after the attack multiplier and bonus.
    pub raw_damage: f32,
    /// Damage removed by the defender's armor (zero when it failed).
    pub mitigation: f32,
    /// Defender health after the strike.
    pub target_hp: f32,
}

impl StrikeReport {
    /// Damage left after mitigation; zero or less means absorbed.
    pub fn net_damage(&self) -> f32 {
        self.raw_damage - self.mitigation
    }
}

/// Resolve one strike from `attacker` on `defender`.
///
/// # Formula
///
/// ```text
/// attacker.stamina -= weapon.stamina_per_hit × attacker.stamina_multiplier
/// raw = round1(uniform(min_damage, max_damage)) × attack_multiplier + bonus
///
/// guard = armor.stamina_per_turn × defender.stamina_multiplier
/// if defender.stamina > guard:
///     defender.stamina -= guard
///     raw -= armor.defence × defender.defence_multiplier
///
/// defender.get_damage(raw)
/// ```
///
/// The swing cost is not checked here; callers decide whether the attacker
/// can afford it. Net damage is passed through unfloored, so armor that
/// over-absorbs a blow restores health up to the class cap.
pub(crate) fn resolve_strike(
    attacker: &mut Unit,
    defender: &mut Unit,
    dice: &mut Dice<'_>,
    spec: StrikeSpec,
) -> Result<StrikeReport, CombatError> {
    let weapon = loadout(attacker)?.0.clone();
    let (defence, guard_cost) = {
        let (_, armor) = loadout(defender)?;
        (armor.defence, armor.stamina_per_turn)
    };

    if spec.charge_weapon {
        attacker.spend_stamina(weapon.stamina_per_hit * attacker.class().stamina_multiplier);
    }

    let raw_damage =
        roll_weapon_damage(&weapon, dice) * attacker.class().attack_multiplier + spec.bonus;

    let guard_cost = guard_cost * defender.class().stamina_multiplier;
    let mitigation = if defender.stamina() > guard_cost {
        defender.spend_stamina(guard_cost);
        defence * defender.class().defence_multiplier
    } else {
        0.0
    };

    let target_hp = defender.get_damage(raw_damage - mitigation);

    Ok(StrikeReport {
        raw_damage,
        mitigation,
        target_hp,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::{ArmorSpec, FixedRng, PcgRng, SkillEffect, SkillSpec, UnitClassSpec};

    fn plain_class() -> Arc<UnitClassSpec> {
        Arc::new(UnitClassSpec {
            name: "Plain".into(),
            max_health: 50.0,
            max_stamina: 20.0,
            attack_multiplier: 1.0,
            defence_multiplier: 1.0,
            stamina_multiplier: 1.0,
            skill: SkillSpec::new("Jab", 5.0, SkillEffect::PiercingBlow { damage: 5.0 }),
        })
    }

    fn fighter(stamina: f32) -> Unit {
        Unit::player("Ann", plain_class())
            .with_weapon(WeaponSpec::new(1, "club", 5.0, 10.0, 2.0))
            .with_armor(ArmorSpec::new(1, "plate", 3.0, 3.0))
            .with_stamina(stamina)
    }

    #[test]
    fn samples_stay_within_weapon_bounds() {
        let weapon = WeaponSpec::new(1, "club", 5.0, 10.0, 2.0);
        let rng = PcgRng;
        for nonce in 0..1000 {
            let mut dice = Dice::new(&rng, 17, nonce, 0);
            let damage = roll_weapon_damage(&weapon, &mut dice);
            assert!((5.0..=10.0).contains(&damage), "{damage} out of bounds");
        }
    }

    #[test]
    fn armor_mitigates_when_defender_can_pay() {
        let mut attacker = fighter(20.0);
        let mut defender = fighter(20.0);
        let mut dice = Dice::new(&FixedRng::MAX, 0, 0, 0);

        let report =
            resolve_strike(&mut attacker, &mut defender, &mut dice, StrikeSpec::weapon()).unwrap();

        assert_eq!(report.raw_damage, 10.0);
        assert_eq!(report.mitigation, 3.0);
        assert_eq!(report.target_hp, 43.0);
        assert_eq!(attacker.stamina(), 18.0);
        assert_eq!(defender.stamina(), 17.0);
    }

    #[test]
    fn exhausted_defender_takes_full_damage() {
        let mut attacker = fighter(20.0);
        let mut defender = fighter(0.0);
        let mut dice = Dice::new(&FixedRng(0), 0, 0, 0);

        let report =
            resolve_strike(&mut attacker, &mut defender, &mut dice, StrikeSpec::weapon()).unwrap();

        assert_eq!(report.raw_damage, 5.0);
        assert_eq!(report.mitigation, 0.0);
        assert_eq!(defender.hp(), 45.0);
        assert_eq!(defender.stamina(), 0.0);
    }

    #[test]
    fn defender_exactly_at_guard_cost_gets_no_mitigation() {
        let mut attacker = fighter(20.0);
        let mut defender = fighter(3.0);
        let mut dice = Dice::new(&FixedRng(0), 0, 0, 0);

        let report =
            resolve_strike(&mut attacker, &mut defender, &mut dice, StrikeSpec::weapon()).unwrap();

        assert_eq!(report.mitigation, 0.0);
        assert_eq!(defender.stamina(), 3.0);
    }

    #[test]
    fn over_absorbed_blow_restores_health() {
        let mut attacker = fighter(20.0);
        let mut defender = Unit::enemy("Bob", plain_class())
            .with_weapon(WeaponSpec::new(1, "club", 5.0, 10.0, 2.0))
            .with_armor(ArmorSpec::new(2, "tower", 8.0, 1.0))
            .with_health(40.0);
        let mut dice = Dice::new(&FixedRng(0), 0, 0, 0);

        let report =
            resolve_strike(&mut attacker, &mut defender, &mut dice, StrikeSpec::weapon()).unwrap();

        assert_eq!(report.net_damage(), -3.0);
        assert_eq!(report.target_hp, 43.0);
        assert_eq!(defender.hp(), 43.0);
    }

    #[test]
    fn restored_health_stops_at_class_cap() {
        let mut attacker = fighter(20.0);
        let mut defender = Unit::enemy("Bob", plain_class())
            .with_weapon(WeaponSpec::new(1, "club", 5.0, 10.0, 2.0))
            .with_armor(ArmorSpec::new(2, "tower", 8.0, 1.0))
            .with_health(49.0);
        let mut dice = Dice::new(&FixedRng(0), 0, 0, 0);

        resolve_strike(&mut attacker, &mut defender, &mut dice, StrikeSpec::weapon()).unwrap();

        assert_eq!(defender.hp(), 50.0);
    }

    #[test]
    fn empowered_strike_skips_swing_cost() {
        let mut attacker = fighter(20.0);
        let mut defender = fighter(0.0);
        let mut dice = Dice::new(&FixedRng(0), 0, 0, 0);

        let report = resolve_strike(
            &mut attacker,
            &mut defender,
            &mut dice,
            StrikeSpec::empowered(4.0),
        )
        .unwrap();

        assert_eq!(report.raw_damage, 9.0);
        assert_eq!(attacker.stamina(), 20.0);
    }

    #[test]
    fn unequipped_units_are_rejected() {
        let mut attacker = Unit::player("Ann", plain_class());
        let mut defender = fighter(10.0);
        let mut dice = Dice::new(&FixedRng(0), 0, 0, 0);

        let result = resolve_strike(&mut attacker, &mut defender, &mut dice, StrikeSpec::weapon());
        assert!(matches!(result, Err(CombatError::Unequipped { .. })));
        assert_eq!(defender.hp(), 50.0);
    }
}
