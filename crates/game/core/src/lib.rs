//! Deterministic combat rules for a two-unit, turn-based arena.
//!
//! `arena-core` defines units, their equipment and class stats, the damage
//! and stamina formulas, and the [`engine::Battle`] state machine that
//! sequences a player-versus-enemy match. It performs no I/O: catalogs and
//! class definitions arrive through the oracle traits in [`env`], and all
//! randomness flows through an injected [`env::RngOracle`].
//!
//! All battle mutation flows through [`engine::Battle`]; hosts (CLI, tests,
//! services) depend on the types re-exported here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use combat::{ActionEffect, ActionKind, ActionOutcome, CombatError, roll_weapon_damage};
pub use config::ArenaConfig;
pub use engine::{Battle, BattleError, BattlePhase, BattleResult, TurnReport, TurnResponse};
pub use env::{
    ArmorSpec, CatalogError, ClassOracle, ClassRegistry, Dice, EquipmentCatalog, EquipmentOracle,
    FixedRng, PcgRng, RngOracle, SkillEffect, SkillSpec, UnitClassSpec, WeaponSpec,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{Equipment, EquipmentSlot, Role, Unit};
