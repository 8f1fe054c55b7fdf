use std::sync::Arc;

use crate::env::{ArmorSpec, UnitClassSpec, WeaponSpec};

use super::Equipment;

/// Round to one decimal place, the precision used for health and display.
pub fn round_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Which side a unit fights on.
///
/// Combat math is identical for both roles; the role only decides who acts
/// on the player's command and who acts automatically (the enemy may fire
/// its skill on its own).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Player,
    Enemy,
}

impl Role {
    /// Stable identifier used when deriving roll seeds.
    pub const fn actor_id(self) -> u32 {
        match self {
            Role::Player => 0,
            Role::Enemy => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Role::Player => Role::Enemy,
            Role::Enemy => Role::Player,
        }
    }
}

/// A combatant.
///
/// # Invariants
///
/// - `0 <= hp <= class.max_health`, rounded to one decimal
/// - `0 <= stamina <= class.max_stamina`
/// - `skill_used` only ever goes from `false` to `true`
#[derive(Clone, Debug)]
pub struct Unit {
    name: String,
    role: Role,
    class: Arc<UnitClassSpec>,
    hp: f32,
    stamina: f32,
    equipment: Equipment,
    skill_used: bool,
}

impl Unit {
    /// Creates a unit at full health and stamina with nothing equipped.
    pub fn new(name: impl Into<String>, role: Role, class: Arc<UnitClassSpec>) -> Self {
        Self {
            name: name.into(),
            role,
            hp: class.max_health,
            stamina: class.max_stamina,
            class,
            equipment: Equipment::empty(),
            skill_used: false,
        }
    }

    pub fn player(name: impl Into<String>, class: Arc<UnitClassSpec>) -> Self {
        Self::new(name, Role::Player, class)
    }

    pub fn enemy(name: impl Into<String>, class: Arc<UnitClassSpec>) -> Self {
        Self::new(name, Role::Enemy, class)
    }

    pub fn with_weapon(mut self, weapon: WeaponSpec) -> Self {
        self.equipment.equip_weapon(weapon);
        self
    }

    pub fn with_armor(mut self, armor: ArmorSpec) -> Self {
        self.equipment.equip_armor(armor);
        self
    }

    /// Overrides current health (clamped and rounded).
    pub fn with_health(mut self, hp: f32) -> Self {
        self.hp = round_tenths(hp).clamp(0.0, self.class.max_health);
        self
    }

    /// Overrides current stamina (clamped).
    pub fn with_stamina(mut self, stamina: f32) -> Self {
        self.stamina = stamina.clamp(0.0, self.class.max_stamina);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn class(&self) -> &UnitClassSpec {
        &self.class
    }

    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    /// Health rounded for display.
    pub fn health_points(&self) -> f32 {
        round_tenths(self.hp)
    }

    /// Stamina rounded for display.
    pub fn stamina_points(&self) -> f32 {
        round_tenths(self.stamina)
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn weapon(&self) -> Option<&WeaponSpec> {
        self.equipment.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&ArmorSpec> {
        self.equipment.armor.as_ref()
    }

    pub fn skill_used(&self) -> bool {
        self.skill_used
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn equip_weapon(&mut self, weapon: WeaponSpec) -> String {
        let message = format!("{} is now wielding {}", self.name, weapon.name);
        self.equipment.equip_weapon(weapon);
        message
    }

    pub fn equip_armor(&mut self, armor: ArmorSpec) -> String {
        let message = format!("{} is now wearing {}", self.name, armor.name);
        self.equipment.equip_armor(armor);
        message
    }

    /// Subtracts `amount` from health and returns the new health.
    ///
    /// The result is rounded to one decimal and clamped to
    /// `[0, max_health]`, so a zero amount leaves health unchanged and a
    /// negative amount can never push health past the class cap.
    pub fn get_damage(&mut self, amount: f32) -> f32 {
        self.hp = round_tenths(self.hp - amount).clamp(0.0, self.class.max_health);
        self.hp
    }

    pub(crate) fn spend_stamina(&mut self, amount: f32) {
        self.stamina = (self.stamina - amount).clamp(0.0, self.class.max_stamina);
    }

    pub(crate) fn restore_stamina(&mut self, amount: f32) {
        self.stamina = (self.stamina + amount).clamp(0.0, self.class.max_stamina);
    }

    pub(crate) fn mark_skill_used(&mut self) {
        self.skill_used = true;
    }
}
