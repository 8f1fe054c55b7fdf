//! Mutable per-battle state: combatants and what they carry.
//!
//! A [`Unit`] is created by the host from catalog and registry data, then
//! handed over to [`crate::Battle`], which owns it until the next `start`.
mod equipment;
mod unit;

pub use equipment::{Equipment, EquipmentSlot};
pub use unit::{Role, Unit, round_tenths};
