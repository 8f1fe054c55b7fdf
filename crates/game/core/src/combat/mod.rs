//! Combat resolution.
//!
//! # Core Functions
//!
//! - [`Unit::hit`](crate::Unit::hit): role-aware attack (the enemy may fire its skill instead)
//! - [`Unit::use_skill`](crate::Unit::use_skill): one-shot class skill
//! - [`roll_weapon_damage`]: uniform damage sample for a weapon
//!
//! State changes and narration are kept apart: every action returns an
//! [`ActionOutcome`] carrying the numeric deltas, and the text is produced
//! by [`narration`] from those numbers.

mod damage;
mod error;
pub mod narration;
mod outcome;
mod skill;
mod strike;

pub use damage::{StrikeReport, roll_weapon_damage};
pub use error::CombatError;
pub use outcome::{ActionEffect, ActionKind, ActionOutcome};
