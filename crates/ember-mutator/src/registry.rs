//! Per-entity mutator storage

use crate::types::SlotKey;
use ember_core::EntityId;
use std::collections::HashMap;

/// Multi-valued store of constraint instances per entity.
///
/// Each constraint kind owns one registry with its own payload type `M`.
/// An entity may carry several mutators, including duplicates of the same
/// slot key; `find` returns the first exact match in attach order, so the
/// earliest attached duplicate wins.
#[derive(Debug)]
pub struct MutatorRegistry<M> {
    mutators: HashMap<EntityId, Vec<(SlotKey, M)>>,
}

impl<M> Default for MutatorRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MutatorRegistry<M> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            mutators: HashMap::new(),
        }
    }

    /// Attach a mutator to an entity. Duplicate slot keys coexist.
    pub fn attach(&mut self, entity: EntityId, slot: SlotKey, mutator: M) {
        self.mutators.entry(entity).or_default().push((slot, mutator));
    }

    /// Remove all mutators owned by an entity.
    ///
    /// Callable for an entity with none attached; returns how many were
    /// removed.
    pub fn detach(&mut self, entity: EntityId) -> usize {
        self.mutators.remove(&entity).map(|v| v.len()).unwrap_or(0)
    }

    /// First mutator whose slot key matches exactly, in attach order
    pub fn find(&self, entity: EntityId, slot: SlotKey) -> Option<&M> {
        self.mutators
            .get(&entity)?
            .iter()
            .find(|(key, _)| *key == slot)
            .map(|(_, m)| m)
    }

    /// All slot keys registered for an entity, sorted by `(order, group)`
    /// and deduplicated
    pub fn slots(&self, entity: EntityId) -> Vec<SlotKey> {
        let mut slots: Vec<SlotKey> = self
            .mutators
            .get(&entity)
            .map(|v| v.iter().map(|(key, _)| *key).collect())
            .unwrap_or_default();
        slots.sort();
        slots.dedup();
        slots
    }

    /// Number of mutators attached to an entity
    pub fn count(&self, entity: EntityId) -> usize {
        self.mutators.get(&entity).map(|v| v.len()).unwrap_or(0)
    }

    /// Total number of mutators across all entities
    pub fn len(&self) -> usize {
        self.mutators.values().map(|v| v.len()).sum()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.mutators.is_empty()
    }
}
