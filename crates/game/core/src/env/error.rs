//! Content validation errors.
//!
//! Raised while building the equipment catalog or the class registry.
//! Content is validated once at load time so that a battle never observes
//! malformed data.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} entry has an empty name")]
    EmptyName { kind: &'static str },

    #[error("duplicate {kind} '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{kind} catalog is empty")]
    Empty { kind: &'static str },

    #[error("{kind} '{name}': {field} must be a finite non-negative number (got {value})")]
    InvalidValue {
        kind: &'static str,
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("{kind} '{name}': {field} must be greater than zero (got {value})")]
    NonPositive {
        kind: &'static str,
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("weapon '{name}': min_damage {min} exceeds max_damage {max}")]
    InvertedDamageRange { name: String, min: f32, max: f32 },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "CATALOG_EMPTY_NAME",
            Self::DuplicateName { .. } => "CATALOG_DUPLICATE_NAME",
            Self::Empty { .. } => "CATALOG_EMPTY",
            Self::InvalidValue { .. } => "CATALOG_INVALID_VALUE",
            Self::NonPositive { .. } => "CATALOG_NON_POSITIVE",
            Self::InvertedDamageRange { .. } => "CATALOG_INVERTED_RANGE",
        }
    }
}
