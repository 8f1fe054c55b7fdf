//! Classes compiled into the binary.
//!
//! Used when no `classes.ron` is present in the data directory.

use arena_core::{CatalogError, ClassRegistry, SkillEffect, SkillSpec, UnitClassSpec};

pub fn warrior() -> UnitClassSpec {
    UnitClassSpec {
        name: "Warrior".into(),
        max_health: 60.0,
        max_stamina: 30.0,
        attack_multiplier: 0.8,
        defence_multiplier: 1.2,
        stamina_multiplier: 0.9,
        skill: SkillSpec::new("Fury Punch", 6.0, SkillEffect::PiercingBlow { damage: 12.0 }),
    }
}

pub fn thief() -> UnitClassSpec {
    UnitClassSpec {
        name: "Thief".into(),
        max_health: 50.0,
        max_stamina: 25.0,
        attack_multiplier: 1.5,
        defence_multiplier: 1.0,
        stamina_multiplier: 1.2,
        skill: SkillSpec::new("Hard Shot", 5.0, SkillEffect::PiercingBlow { damage: 15.0 }),
    }
}

/// Registry holding the Warrior and the Thief.
pub fn default_classes() -> Result<ClassRegistry, CatalogError> {
    ClassRegistry::new(vec![warrior(), thief()])
}
