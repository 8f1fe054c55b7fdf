//! Text rendering for the terminal.
//!
//! Pure formatting over engine values; nothing here touches the battle.

use arena_core::{BattleResult, TurnResponse, Unit};

pub const BANNER: &str = "=== Arena ===";
pub const MENU: &str = "Type 'fight' to enter the arena or 'quit' to leave.";
pub const FIGHT_COMMANDS: &str = "hit / skill / pass / end";

/// `Name (Class)  hp 43.0/60.0  stamina 18.5/30.0`
pub fn status(unit: &Unit) -> String {
    let class = unit.class();
    format!(
        "{} ({})  hp {:.1}/{:.1}  stamina {:.1}/{:.1}",
        unit.name(),
        class.name,
        unit.health_points(),
        class.max_health,
        unit.stamina_points(),
        class.max_stamina,
    )
}

/// Numbered option list, one per line.
pub fn options<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("  {}) {}", index + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn turn(response: &TurnResponse) -> String {
    match response {
        TurnResponse::Played(report) => report.narration(),
        TurnResponse::Inactive(Some(result)) => {
            format!("The battle is over: {result}. Type 'end' to leave the arena.")
        }
        TurnResponse::Inactive(None) => "No battle is running.".to_owned(),
    }
}

pub fn farewell(result: Option<BattleResult>) -> String {
    match result {
        Some(result) => format!("Battle closed. {result}."),
        None => "Battle abandoned.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arena_core::{SkillEffect, SkillSpec, UnitClassSpec};

    use super::*;

    #[test]
    fn status_rounds_to_one_decimal() {
        let class = Arc::new(UnitClassSpec {
            name: "Thief".into(),
            max_health: 50.0,
            max_stamina: 25.0,
            attack_multiplier: 1.5,
            defence_multiplier: 1.0,
            stamina_multiplier: 1.2,
            skill: SkillSpec::new("Hard Shot", 5.0, SkillEffect::PiercingBlow { damage: 15.0 }),
        });
        let unit = Unit::player("Ann", class).with_stamina(12.34);

        assert_eq!(
            status(&unit),
            "Ann (Thief)  hp 50.0/50.0  stamina 12.3/25.0"
        );
    }

    #[test]
    fn options_are_numbered_from_one() {
        assert_eq!(options(&["axe", "knife"]), "  1) axe\n  2) knife");
    }

    #[test]
    fn inactive_responses_explain_themselves() {
        assert_eq!(
            turn(&TurnResponse::Inactive(Some(BattleResult::EnemyWins))),
            "The battle is over: You lost. Type 'end' to leave the arena."
        );
    }
}
