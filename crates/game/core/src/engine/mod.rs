//! Battle engine.
//!
//! [`Battle`] owns both combatants for the duration of a match and is the
//! only thing that mutates them. It is an ordinary value: the host creates
//! one per session and passes the RNG oracle into every entry point.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ──(a unit reaches 0 hp)──▶ Ended
//!   ▲                │                                 │
//!   └──────end───────┴──────────────end────────────────┘
//! ```
//!
//! `start` may be called from any phase and replaces the previous battle.
//! Entry points invoked outside `Running` return
//! [`TurnResponse::Inactive`] with the frozen result instead of acting.

mod errors;
mod report;
mod turns;

pub use errors::BattleError;
pub use report::{TurnReport, TurnResponse};

use crate::config::ArenaConfig;
use crate::env::{Dice, RngOracle};
use crate::state::{Role, Unit};

/// Lifecycle phase of a battle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    #[default]
    Idle,
    Running,
    Ended,
}

/// Final outcome of a battle, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleResult {
    #[strum(to_string = "You won")]
    PlayerWins,
    #[strum(to_string = "You lost")]
    EnemyWins,
    #[strum(to_string = "Draw")]
    Draw,
}

#[derive(Clone, Debug)]
struct Combatants {
    player: Unit,
    enemy: Unit,
}

/// A single player-versus-enemy match.
#[derive(Clone, Debug)]
pub struct Battle {
    config: ArenaConfig,
    seed: u64,
    nonce: u64,
    combatants: Option<Combatants>,
    phase: BattlePhase,
    result: Option<BattleResult>,
}

impl Battle {
    /// Creates an idle battle. `seed` fixes every roll made by this value.
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            nonce: 0,
            combatants: None,
            phase: BattlePhase::Idle,
            result: None,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == BattlePhase::Running
    }

    /// Frozen result of the last finished battle, if any.
    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    pub fn player(&self) -> Option<&Unit> {
        self.combatants.as_ref().map(|c| &c.player)
    }

    pub fn enemy(&self) -> Option<&Unit> {
        self.combatants.as_ref().map(|c| &c.enemy)
    }

    /// Binds both units and enters `Running`, discarding any previous battle.
    ///
    /// Both units must be fully equipped and carry the role of the seat they
    /// take.
    pub fn start(&mut self, player: Unit, enemy: Unit) -> Result<(), BattleError> {
        admit(&player, Role::Player)?;
        admit(&enemy, Role::Enemy)?;

        tracing::info!(
            player = %player.name(),
            player_class = %player.class().name,
            enemy = %enemy.name(),
            enemy_class = %enemy.class().name,
            "battle started"
        );

        self.combatants = Some(Combatants { player, enemy });
        self.phase = BattlePhase::Running;
        self.result = None;
        Ok(())
    }

    /// Evaluates the end conditions.
    ///
    /// While running: both units down is a draw, otherwise whoever is still
    /// standing wins; with both standing nothing changes and `None` is
    /// returned. Outside `Running` the frozen result is returned unchanged.
    pub fn check_outcome(&mut self) -> Option<BattleResult> {
        if !self.is_running() {
            return self.result;
        }
        let combatants = self.combatants.as_ref()?;

        let result = match (
            combatants.player.is_defeated(),
            combatants.enemy.is_defeated(),
        ) {
            (true, true) => BattleResult::Draw,
            (false, true) => BattleResult::PlayerWins,
            (true, false) => BattleResult::EnemyWins,
            (false, false) => return None,
        };

        self.phase = BattlePhase::Ended;
        self.result = Some(result);
        tracing::info!(%result, "battle finished");
        Some(result)
    }

    /// Stops the battle. The result (if any) stays available until the
    /// next `start`.
    pub fn end(&mut self) -> Option<BattleResult> {
        if self.is_running() {
            tracing::info!("battle abandoned before a result");
        }
        self.phase = BattlePhase::Idle;
        self.result
    }

    /// Roller for the next action, advancing the action nonce.
    fn dice<'r>(&mut self, rng: &'r dyn RngOracle, role: Role) -> Dice<'r> {
        self.nonce += 1;
        Dice::new(rng, self.seed, self.nonce, role.actor_id())
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new(ArenaConfig::default(), 0)
    }
}

fn admit(unit: &Unit, expected: Role) -> Result<(), BattleError> {
    if unit.role() != expected {
        return Err(BattleError::RoleMismatch {
            unit: unit.name().to_owned(),
            expected,
            found: unit.role(),
        });
    }
    if let Some(slot) = unit.equipment().missing_slot() {
        return Err(BattleError::Unequipped {
            unit: unit.name().to_owned(),
            slot,
        });
    }
    Ok(())
}
