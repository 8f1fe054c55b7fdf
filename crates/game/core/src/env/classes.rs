//! Unit class archetypes and their signature skills.

use std::sync::Arc;

use super::{CatalogError, ensure_named, ensure_non_negative, ensure_positive, ensure_unique};

/// Read-only access to the class registry, keyed by class name.
pub trait ClassOracle: Send + Sync {
    fn class(&self, name: &str) -> Option<Arc<UnitClassSpec>>;

    /// Class names in registration order.
    fn class_names(&self) -> Vec<&str>;
}

/// How a skill hurts its target.
///
/// Skills are data: each class names one of these effects together with its
/// parameters, and the combat module interprets it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Fixed damage that bypasses armor entirely.
    PiercingBlow { damage: f32 },

    /// A weapon swing (no weapon stamina charged) with flat bonus damage,
    /// subject to the defender's normal armor mitigation.
    EmpoweredStrike { bonus: f32 },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub name: String,
    pub stamina_cost: f32,
    pub effect: SkillEffect,
}

impl SkillSpec {
    pub fn new(name: impl Into<String>, stamina_cost: f32, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            stamina_cost,
            effect,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_named("skill", &self.name)?;
        ensure_non_negative("skill", &self.name, "stamina_cost", self.stamina_cost)?;
        match self.effect {
            SkillEffect::PiercingBlow { damage } => {
                ensure_non_negative("skill", &self.name, "damage", damage)
            }
            SkillEffect::EmpoweredStrike { bonus } => {
                ensure_non_negative("skill", &self.name, "bonus", bonus)
            }
        }
    }
}

/// Class archetype shared (read-only) by every unit of that class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitClassSpec {
    pub name: String,
    pub max_health: f32,
    pub max_stamina: f32,
    /// Scales sampled weapon damage.
    pub attack_multiplier: f32,
    /// Scales armor defence when mitigating.
    pub defence_multiplier: f32,
    /// Scales the stamina paid for swings and for armor use.
    pub stamina_multiplier: f32,
    pub skill: SkillSpec,
}

impl UnitClassSpec {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let name = self.name.as_str();
        ensure_named("class", name)?;
        ensure_positive("class", name, "max_health", self.max_health)?;
        ensure_positive("class", name, "max_stamina", self.max_stamina)?;
        ensure_positive("class", name, "attack_multiplier", self.attack_multiplier)?;
        ensure_positive("class", name, "defence_multiplier", self.defence_multiplier)?;
        ensure_positive("class", name, "stamina_multiplier", self.stamina_multiplier)?;
        self.skill.validate()
    }
}

/// Validated class registry, populated once and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<Arc<UnitClassSpec>>,
}

impl ClassRegistry {
    pub fn new(classes: Vec<UnitClassSpec>) -> Result<Self, CatalogError> {
        if classes.is_empty() {
            return Err(CatalogError::Empty { kind: "class" });
        }
        for class in &classes {
            class.validate()?;
        }
        ensure_unique("class", classes.iter().map(|class| class.name.as_str()))?;

        Ok(Self {
            classes: classes.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<UnitClassSpec>> {
        self.classes.iter()
    }
}

impl ClassOracle for ClassRegistry {
    fn class(&self, name: &str) -> Option<Arc<UnitClassSpec>> {
        self.classes
            .iter()
            .find(|class| class.name == name)
            .map(Arc::clone)
    }

    fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|class| class.name.as_str()).collect()
    }
}
