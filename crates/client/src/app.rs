//! Interactive session: menu, unit creation and the fight loop.
//!
//! ```text
//! menu ──fight──▶ hero ──▶ enemy ──▶ fight ──end──▶ menu
//!   └──quit──▶ exit                    (EOF anywhere exits)
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use arena_core::{
    Battle, ClassOracle, ClassRegistry, EquipmentCatalog, EquipmentOracle, GameError, RngOracle,
    Role, Unit,
};

use crate::presentation;

/// Read-only content loaded at startup.
pub struct Content {
    pub equipment: EquipmentCatalog,
    pub classes: ClassRegistry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum MenuChoice {
    Fight,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum FightCommand {
    Hit,
    Skill,
    Pass,
    End,
}

/// Whether the session continues after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct App<R, W> {
    content: Content,
    battle: Battle,
    rng: Box<dyn RngOracle>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        content: Content,
        battle: Battle,
        rng: Box<dyn RngOracle>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            content,
            battle,
            rng,
            input,
            output,
        }
    }

    pub fn run(mut self) -> Result<()> {
        writeln!(self.output, "{}", presentation::BANNER)?;
        loop {
            writeln!(self.output, "{}", presentation::MENU)?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Fight) => {
                    if self.play()? == Flow::Exit {
                        break;
                    }
                }
                Ok(MenuChoice::Quit) => break,
                Err(_) => writeln!(self.output, "Unknown choice '{line}'.")?,
            }
        }
        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    /// One battle: pick both units, then fight until `end`.
    fn play(&mut self) -> Result<Flow> {
        let Some(hero) = self.create_unit(Role::Player)? else {
            return Ok(Flow::Exit);
        };
        let Some(enemy) = self.create_unit(Role::Enemy)? else {
            return Ok(Flow::Exit);
        };

        if let Err(error) = self.battle.start(hero, enemy) {
            tracing::warn!(
                %error,
                code = error.error_code(),
                severity = error.severity().as_str(),
                "battle could not start"
            );
            writeln!(self.output, "{error}")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "The battle begins!")?;

        self.fight()
    }

    fn fight(&mut self) -> Result<Flow> {
        loop {
            self.show_status()?;
            writeln!(self.output, "{}", presentation::FIGHT_COMMANDS)?;
            let Some(line) = self.read_line()? else {
                self.battle.end();
                return Ok(Flow::Exit);
            };
            let command = match line.parse::<FightCommand>() {
                Ok(command) => command,
                Err(_) => {
                    writeln!(self.output, "Unknown command '{line}'.")?;
                    continue;
                }
            };

            let rng = self.rng.as_ref();
            let response = match command {
                FightCommand::Hit => self.battle.player_hit(rng)?,
                FightCommand::Skill => self.battle.player_use_skill(rng)?,
                FightCommand::Pass => self.battle.next_turn(rng)?,
                FightCommand::End => {
                    let result = self.battle.end();
                    writeln!(self.output, "{}", presentation::farewell(result))?;
                    return Ok(Flow::Continue);
                }
            };
            writeln!(self.output, "{}", presentation::turn(&response))?;
        }
    }

    fn show_status(&mut self) -> Result<()> {
        if let (Some(player), Some(enemy)) = (self.battle.player(), self.battle.enemy()) {
            writeln!(self.output, "{}", presentation::status(player))?;
            writeln!(self.output, "{}", presentation::status(enemy))?;
        }
        Ok(())
    }

    /// Prompts for name, class, weapon and armor. `None` on end of input.
    fn create_unit(&mut self, role: Role) -> Result<Option<Unit>> {
        let (who, fallback) = match role {
            Role::Player => ("your hero", "Hero"),
            Role::Enemy => ("the enemy", "Enemy"),
        };

        writeln!(self.output, "Name {who}:")?;
        let Some(name) = self.read_line()? else {
            return Ok(None);
        };
        let name = if name.is_empty() { fallback.to_owned() } else { name };

        let class_names = owned(self.content.classes.class_names());
        let Some(class) = self.pick("class", &class_names)? else {
            return Ok(None);
        };
        let weapon_names = owned(self.content.equipment.weapon_names());
        let Some(weapon) = self.pick("weapon", &weapon_names)? else {
            return Ok(None);
        };
        let armor_names = owned(self.content.equipment.armor_names());
        let Some(armor) = self.pick("armor", &armor_names)? else {
            return Ok(None);
        };

        let (Some(class), Some(weapon), Some(armor)) = (
            self.content.classes.class(&class),
            self.content.equipment.weapon(&weapon).cloned(),
            self.content.equipment.armor(&armor).cloned(),
        ) else {
            anyhow::bail!("picked an entry missing from the loaded content");
        };

        let mut unit = Unit::new(name, role, class);
        let wielding = unit.equip_weapon(weapon);
        let wearing = unit.equip_armor(armor);
        writeln!(self.output, "{wielding}")?;
        writeln!(self.output, "{wearing}")?;

        Ok(Some(unit))
    }

    /// Lets the user choose one of `options` by number or by name.
    fn pick(&mut self, label: &str, options: &[String]) -> Result<Option<String>> {
        loop {
            writeln!(self.output, "Choose a {label}:")?;
            writeln!(self.output, "{}", presentation::options(options))?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let by_number = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| options.get(index));
            let by_name = options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(&line));

            match by_number.or(by_name) {
                Some(choice) => return Ok(Some(choice.clone())),
                None => writeln!(self.output, "Unknown {label} '{line}'.")?,
            }
        }
    }

    /// Next trimmed input line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_owned).collect()
}
