//! Data-driven content definitions and loaders.
//!
//! This crate houses the arena's static content and the loaders for its
//! data files:
//! - Equipment catalog (weapons and armors, JSON)
//! - Unit classes and their skills (RON)
//! - Arena rules (TOML)
//!
//! Content is turned into the read-only oracles of `arena-core` once at
//! startup and never changes during a battle.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::default_classes;

#[cfg(feature = "loaders")]
pub use loaders::{
    ClassLoader, ConfigLoader, ContentFactory, EquipmentFile, EquipmentLoader, LoadResult,
};
