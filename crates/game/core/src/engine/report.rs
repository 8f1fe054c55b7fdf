//! What a turn entry point hands back to the host.

use crate::combat::ActionOutcome;

use super::BattleResult;

/// Everything that happened during one round.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// The player's action, absent when the player passed.
    pub player: Option<ActionOutcome>,
    /// The enemy's reply, absent when the player's action ended the battle.
    pub enemy: Option<ActionOutcome>,
    /// Set when the round finished the battle.
    pub result: Option<BattleResult>,
}

impl TurnReport {
    /// The player's line followed by the enemy's line and the result,
    /// newline-separated, skipping whatever did not happen.
    pub fn narration(&self) -> String {
        let result = self.result.map(|result| result.to_string());
        [
            self.player.as_ref().map(|outcome| outcome.narration.as_str()),
            self.enemy.as_ref().map(|outcome| outcome.narration.as_str()),
            result.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
    }

    pub fn is_final(&self) -> bool {
        self.result.is_some()
    }
}

/// Response of [`super::Battle::player_hit`], [`super::Battle::player_use_skill`]
/// and [`super::Battle::next_turn`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnResponse {
    /// The round was played.
    Played(TurnReport),
    /// The battle was not running; nothing changed. Carries the frozen
    /// result of the last battle, if it produced one.
    Inactive(Option<BattleResult>),
}

impl TurnResponse {
    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            Self::Played(report) => Some(report),
            Self::Inactive(_) => None,
        }
    }

    pub fn result(&self) -> Option<BattleResult> {
        match self {
            Self::Played(report) => report.result,
            Self::Inactive(result) => *result,
        }
    }

    /// Display text: the round's narration, or just the frozen result
    /// (empty when there is none).
    pub fn narration(&self) -> String {
        match self {
            Self::Played(report) => report.narration(),
            Self::Inactive(result) => result.map(|r| r.to_string()).unwrap_or_default(),
        }
    }
}
