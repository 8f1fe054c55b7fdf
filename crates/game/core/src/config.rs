/// Battle tuning parameters.
///
/// Every field has a default, so a config file only needs to list the
/// values it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Stamina restored to both units at the end of every round.
    pub stamina_per_round: f32,

    /// Chance (out of `skill_roll_sides`) that the enemy spends its skill
    /// instead of a normal attack.
    pub enemy_skill_chance: u32,

    /// Upper bound (exclusive) of the enemy's skill-trigger roll.
    pub skill_roll_sides: u32,
}

impl ArenaConfig {
    pub const DEFAULT_STAMINA_PER_ROUND: f32 = 1.0;
    pub const DEFAULT_ENEMY_SKILL_CHANCE: u32 = 10;
    pub const DEFAULT_SKILL_ROLL_SIDES: u32 = 100;

    pub fn new() -> Self {
        Self {
            stamina_per_round: Self::DEFAULT_STAMINA_PER_ROUND,
            enemy_skill_chance: Self::DEFAULT_ENEMY_SKILL_CHANCE,
            skill_roll_sides: Self::DEFAULT_SKILL_ROLL_SIDES,
        }
    }

    pub fn with_stamina_per_round(mut self, stamina_per_round: f32) -> Self {
        self.stamina_per_round = stamina_per_round;
        self
    }

    pub fn with_enemy_skill_chance(mut self, enemy_skill_chance: u32) -> Self {
        self.enemy_skill_chance = enemy_skill_chance;
        self
    }

    pub fn with_skill_roll_sides(mut self, skill_roll_sides: u32) -> Self {
        self.skill_roll_sides = skill_roll_sides;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
