//! Error types for Ember

use glam::Vec3;
use thiserror::Error;

use crate::{EntityId, HashValue};

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Invalid bounds for '{field}': min {min} exceeds max {max}")]
    InvalidBounds {
        field: &'static str,
        min: Vec3,
        max: Vec3,
    },

    #[error("Degenerate bounds for '{0}': box has zero extent")]
    DegenerateBounds(&'static str),

    #[error("No mutator matches entity {entity}, group {group}, order {order}")]
    MissingMutator {
        entity: EntityId,
        group: HashValue,
        order: i32,
    },

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}
