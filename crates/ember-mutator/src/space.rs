//! Coordinate-space resolution against a per-frame hierarchy snapshot

use crate::types::MutateSpace;
use ember_core::{EntityId, Sqt};
use glam::Vec3;
use std::collections::HashMap;

/// Read-only world-from-parent frames for the current frame.
///
/// The hierarchy pass captures one entry per entity before dispatching
/// mutators and hands the snapshot down, so world-space resolution never
/// reaches into the hierarchy while it is being rebuilt. An entity missing
/// from the snapshot simply has no world frame yet this frame.
#[derive(Debug, Default)]
pub struct HierarchySnapshot {
    frames: HashMap<EntityId, Sqt>,
}

impl HierarchySnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self {
            frames: HashMap::new(),
        }
    }

    /// Record the world-from-parent frame for an entity
    pub fn insert(&mut self, entity: EntityId, world_from_parent: Sqt) {
        self.frames.insert(entity, world_from_parent);
    }

    /// The world-from-parent frame for an entity, if captured this frame
    pub fn world_from_parent(&self, entity: EntityId) -> Option<&Sqt> {
        self.frames.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Run a translation edit in the declared space and return the result in
/// the caller's (parent-relative) frame.
///
/// Local and Parent are pass-throughs: the candidate translation already
/// arrives parent-relative, which is also the frame local geometry is
/// authored in. World converts through the entity's snapshot frame, edits,
/// and converts back; if the edit leaves the world position untouched the
/// original translation is returned bit-identical, skipping the round-trip.
///
/// Returns `None` when the entity has no world frame in the snapshot and
/// one is required.
pub fn resolve_in_space<F>(
    space: MutateSpace,
    snapshot: &HierarchySnapshot,
    entity: EntityId,
    translation: Vec3,
    edit: F,
) -> Option<Vec3>
where
    F: FnOnce(Vec3) -> Vec3,
{
    match space {
        MutateSpace::Local | MutateSpace::Parent => Some(edit(translation)),
        MutateSpace::World => {
            let frame = snapshot.world_from_parent(entity)?;
            let world = frame.transform_point(translation);
            let edited = edit(world);
            if edited == world {
                return Some(translation);
            }
            Some(frame.inverse_transform_point(edited))
        }
    }
}
