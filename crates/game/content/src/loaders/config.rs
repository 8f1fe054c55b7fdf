//! Arena configuration loader.

use std::path::Path;

use arena_core::ArenaConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their default values.
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.stamina_per_round.is_finite() && config.stamina_per_round >= 0.0,
            "stamina_per_round must be a non-negative number, got {}",
            config.stamina_per_round
        );
        anyhow::ensure!(
            config.skill_roll_sides > 0,
            "skill_roll_sides must be positive"
        );
        anyhow::ensure!(
            config.enemy_skill_chance <= config.skill_roll_sides,
            "enemy_skill_chance {} exceeds skill_roll_sides {}",
            config.enemy_skill_chance,
            config.skill_roll_sides
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("enemy_skill_chance = 25").unwrap();
        assert_eq!(config.enemy_skill_chance, 25);
        assert_eq!(
            config.stamina_per_round,
            ArenaConfig::DEFAULT_STAMINA_PER_ROUND
        );
        assert_eq!(config.skill_roll_sides, ArenaConfig::DEFAULT_SKILL_ROLL_SIDES);
    }

    #[test]
    fn rejects_zero_sided_roll() {
        assert!(ConfigLoader::parse("skill_roll_sides = 0").is_err());
    }

    #[test]
    fn rejects_chance_above_roll_sides() {
        let error = ConfigLoader::parse("enemy_skill_chance = 30\nskill_roll_sides = 20")
            .unwrap_err();
        assert!(error.to_string().contains("exceeds skill_roll_sides"));
    }

    #[test]
    fn accepts_guaranteed_skill_chance() {
        let config = ConfigLoader::parse("enemy_skill_chance = 20\nskill_roll_sides = 20").unwrap();
        assert_eq!(
            config,
            ArenaConfig::new()
                .with_enemy_skill_chance(20)
                .with_skill_roll_sides(20)
        );
    }
}
