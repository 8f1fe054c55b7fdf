//! Traits describing read-only content.
//!
//! Oracles expose the equipment catalog, the unit class registry, and the
//! random number source. The engine only reads from them; hosts build the
//! concrete implementations once at startup (see `arena-content`).
use std::collections::HashSet;

mod classes;
mod equipment;
mod error;
mod rng;

pub use classes::{ClassOracle, ClassRegistry, SkillEffect, SkillSpec, UnitClassSpec};
pub use equipment::{ArmorSpec, EquipmentCatalog, EquipmentOracle, WeaponSpec};
pub use error::CatalogError;
pub use rng::{Dice, FixedRng, PcgRng, RngOracle, compute_seed};

/// Ensures a numeric field is finite and not negative.
pub(crate) fn ensure_non_negative(
    kind: &'static str,
    name: &str,
    field: &'static str,
    value: f32,
) -> Result<(), CatalogError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidValue {
            kind,
            name: name.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

/// Ensures a numeric field is finite and strictly positive.
pub(crate) fn ensure_positive(
    kind: &'static str,
    name: &str,
    field: &'static str,
    value: f32,
) -> Result<(), CatalogError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogError::NonPositive {
            kind,
            name: name.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

pub(crate) fn ensure_named(kind: &'static str, name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::EmptyName { kind });
    }
    Ok(())
}

pub(crate) fn ensure_unique<'a>(
    kind: &'static str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}
