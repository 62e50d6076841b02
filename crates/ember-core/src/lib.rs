//! Ember Core - Foundational types for the Ember engine
//!
//! This crate provides the core types that all other Ember crates depend on:
//! - `EntityId` - Stable entity identifiers
//! - `HashValue` - Stable string hashing for group keys
//! - `Sqt`, `Aabb` - Spatial types
//! - Error types and Result alias

mod error;
mod hash;
mod id;
mod math;

pub use error::{EmberError, Result};
pub use hash::HashValue;
pub use id::EntityId;
pub use math::{Aabb, Sqt};
