//! Round sequencing.
//!
//! A round is one atomic call: the player's action, an outcome check,
//! end-of-round regeneration, the enemy's reply and a final outcome check.

use crate::combat::ActionOutcome;
use crate::env::RngOracle;
use crate::state::Role;

use super::{Battle, BattleError, TurnReport, TurnResponse};

/// Player-side action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerMove {
    Hit,
    Skill,
}

/// Round methods for Battle.
impl Battle {
    /// Swing the player's weapon, then close the round.
    pub fn player_hit(&mut self, rng: &dyn RngOracle) -> Result<TurnResponse, BattleError> {
        self.play_round(rng, Some(PlayerMove::Hit))
    }

    /// Fire the player's class skill, then close the round.
    pub fn player_use_skill(&mut self, rng: &dyn RngOracle) -> Result<TurnResponse, BattleError> {
        self.play_round(rng, Some(PlayerMove::Skill))
    }

    /// Close the round without a player action: outcome check,
    /// regeneration and the enemy's reply.
    pub fn next_turn(&mut self, rng: &dyn RngOracle) -> Result<TurnResponse, BattleError> {
        self.play_round(rng, None)
    }

    fn play_round(
        &mut self,
        rng: &dyn RngOracle,
        action: Option<PlayerMove>,
    ) -> Result<TurnResponse, BattleError> {
        if !self.is_running() {
            tracing::warn!(phase = %self.phase, ?action, "battle is not running");
            return Ok(TurnResponse::Inactive(self.result));
        }

        let player = match action {
            Some(action) => Some(self.player_action(rng, action)?),
            None => None,
        };

        if let Some(result) = self.check_outcome() {
            return Ok(TurnResponse::Played(TurnReport {
                player,
                enemy: None,
                result: Some(result),
            }));
        }

        self.regenerate();
        let enemy = self.enemy_action(rng)?;
        let result = self.check_outcome();

        Ok(TurnResponse::Played(TurnReport {
            player,
            enemy: Some(enemy),
            result,
        }))
    }

    fn player_action(
        &mut self,
        rng: &dyn RngOracle,
        action: PlayerMove,
    ) -> Result<ActionOutcome, BattleError> {
        let mut dice = self.dice(rng, Role::Player);
        let combatants = self
            .combatants
            .as_mut()
            .ok_or(BattleError::MissingCombatants)?;
        let (player, enemy) = (&mut combatants.player, &mut combatants.enemy);

        let outcome = match action {
            PlayerMove::Hit => player.hit(enemy, &mut dice, &self.config)?,
            PlayerMove::Skill => player.use_skill(enemy, &mut dice)?,
        };
        Ok(outcome)
    }

    fn enemy_action(&mut self, rng: &dyn RngOracle) -> Result<ActionOutcome, BattleError> {
        let mut dice = self.dice(rng, Role::Enemy);
        let combatants = self
            .combatants
            .as_mut()
            .ok_or(BattleError::MissingCombatants)?;
        let (player, enemy) = (&mut combatants.player, &mut combatants.enemy);

        Ok(enemy.hit(player, &mut dice, &self.config)?)
    }

    /// End-of-round stamina recovery, capped at each class maximum.
    fn regenerate(&mut self) {
        let amount = self.config.stamina_per_round;
        if let Some(combatants) = self.combatants.as_mut() {
            combatants.player.restore_stamina(amount);
            combatants.enemy.restore_stamina(amount);
            tracing::debug!(
                player_stamina = combatants.player.stamina(),
                enemy_stamina = combatants.enemy.stamina(),
                "stamina regenerated"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::combat::{ActionEffect, ActionKind};
    use crate::config::ArenaConfig;
    use crate::engine::{BattlePhase, BattleResult};
    use crate::env::{ArmorSpec, FixedRng, SkillEffect, SkillSpec, UnitClassSpec, WeaponSpec};
    use crate::state::Unit;

    fn class(max_health: f32) -> Arc<UnitClassSpec> {
        Arc::new(UnitClassSpec {
            name: "Plain".into(),
            max_health,
            max_stamina: 20.0,
            attack_multiplier: 1.0,
            defence_multiplier: 1.0,
            stamina_multiplier: 1.0,
            skill: SkillSpec::new("Jab", 5.0, SkillEffect::PiercingBlow { damage: 7.0 }),
        })
    }

    fn equipped(unit: Unit) -> Unit {
        unit.with_weapon(WeaponSpec::new(1, "club", 5.0, 10.0, 2.0))
            .with_armor(ArmorSpec::new(1, "plate", 3.0, 3.0))
    }

    fn running(player: Unit, enemy: Unit) -> Battle {
        let mut battle = Battle::new(ArenaConfig::default(), 7);
        battle.start(player, enemy).unwrap();
        battle
    }

    #[test]
    fn full_round_regenerates_then_enemy_replies() {
        let mut battle = running(
            equipped(Unit::player("Ann", class(50.0))),
            equipped(Unit::enemy("Bob", class(50.0))),
        );

        let response = battle.player_hit(&FixedRng::MAX).unwrap();
        let report = response.report().unwrap();

        let player = report.player.as_ref().unwrap();
        let enemy = report.enemy.as_ref().unwrap();
        assert_eq!(player.effect, ActionEffect::Landed { damage: 7.0 });
        assert_eq!(enemy.kind, ActionKind::Hit);
        assert_eq!(enemy.effect, ActionEffect::Landed { damage: 7.0 });
        assert!(report.result.is_none());

        // 20 - 2 (swing) - 3 (guard) + 1 (regen) = 16, capped at 20
        let ann = battle.player().unwrap();
        let bob = battle.enemy().unwrap();
        assert_eq!(ann.hp(), 43.0);
        assert_eq!(bob.hp(), 43.0);
        assert_eq!(ann.stamina(), 16.0);
        assert_eq!(bob.stamina(), 16.0);
        assert_eq!(
            response.narration(),
            format!("{}\n{}", player.narration, enemy.narration)
        );
    }

    #[test]
    fn finishing_blow_skips_enemy_reply() {
        let mut battle = running(
            equipped(Unit::player("Ann", class(50.0))),
            equipped(Unit::enemy("Bob", class(50.0))).with_health(5.0),
        );

        let response = battle.player_use_skill(&FixedRng::MAX).unwrap();
        let report = response.report().unwrap();

        assert!(report.enemy.is_none());
        assert_eq!(report.result, Some(BattleResult::PlayerWins));
        assert_eq!(battle.phase(), BattlePhase::Ended);
        assert_eq!(battle.player().unwrap().stamina(), 15.0);
        assert!(response.narration().ends_with("You won"));
    }

    #[test]
    fn enemy_can_win_on_its_reply() {
        let mut battle = running(
            equipped(Unit::player("Ann", class(50.0))).with_health(1.0),
            equipped(Unit::enemy("Bob", class(50.0))),
        );

        let response = battle.next_turn(&FixedRng::MAX).unwrap();

        assert_eq!(response.result(), Some(BattleResult::EnemyWins));
        assert!(response.report().unwrap().player.is_none());
        assert_eq!(battle.player().unwrap().hp(), 0.0);
    }

    #[test]
    fn inactive_battle_changes_nothing() {
        let mut battle = Battle::default();
        assert_eq!(
            battle.player_hit(&FixedRng::MAX).unwrap(),
            TurnResponse::Inactive(None)
        );

        battle
            .start(
                equipped(Unit::player("Ann", class(50.0))),
                equipped(Unit::enemy("Bob", class(50.0))).with_health(0.0),
            )
            .unwrap();
        battle.next_turn(&FixedRng::MAX).unwrap();
        let hp = battle.player().unwrap().hp();

        let response = battle.player_use_skill(&FixedRng::MAX).unwrap();
        assert_eq!(response, TurnResponse::Inactive(Some(BattleResult::PlayerWins)));
        assert_eq!(battle.player().unwrap().hp(), hp);
        assert!(!battle.player().unwrap().skill_used());
    }
}
