//! Stay-in-box constraint: keep an entity's translation inside a box

use crate::dispatch::{MutateOutcome, SqtMutator};
use crate::registry::MutatorRegistry;
use crate::space::{resolve_in_space, HierarchySnapshot};
use crate::types::{MutateSpace, MutatorDef, MutatorFile, SlotKey};
use ember_core::{Aabb, EmberError, EntityId, HashValue, Result, Sqt};

/// One configured stay-in-box constraint.
///
/// Clamps the translation of a candidate Sqt into `bounds`, widened by a
/// non-empty `stretch` box. Scale and rotation pass through untouched.
/// Instances are fixed at attach time; a configuration change re-attaches
/// rather than editing in place.
#[derive(Debug, Clone)]
pub struct StayInBoxMutator {
    pub space: MutateSpace,
    pub bounds: Aabb,
    pub stretch: Aabb,
}

impl StayInBoxMutator {
    /// Build from a configuration payload, validating bounds up front.
    ///
    /// Inverted bounds on either box and a zero-extent primary box are
    /// configuration errors; an absent or empty stretch box means "no
    /// stretch".
    pub fn from_def(def: &MutatorDef) -> Result<Self> {
        if !def.bounds.is_valid() {
            return Err(EmberError::InvalidBounds {
                field: "box",
                min: def.bounds.min,
                max: def.bounds.max,
            });
        }
        if def.bounds.is_empty() {
            return Err(EmberError::DegenerateBounds("box"));
        }

        let stretch = def.stretch.unwrap_or(Aabb::EMPTY);
        if !stretch.is_valid() {
            return Err(EmberError::InvalidBounds {
                field: "stretch",
                min: stretch.min,
                max: stretch.max,
            });
        }

        Ok(Self {
            space: def.space,
            bounds: def.bounds,
            stretch,
        })
    }

    /// The allowed region: `bounds` widened by a non-empty stretch box
    fn region(&self) -> Aabb {
        if self.stretch.is_empty() {
            self.bounds
        } else {
            self.bounds.union(&self.stretch)
        }
    }

    /// Clamp `sqt`'s translation into the allowed region, resolving the
    /// declared space through the snapshot.
    ///
    /// Reports `NotApplied` when a world frame is needed but not captured
    /// this frame; the transform is left untouched.
    pub fn apply(
        &self,
        entity: EntityId,
        snapshot: &HierarchySnapshot,
        sqt: &mut Sqt,
    ) -> MutateOutcome {
        let region = self.region();
        match resolve_in_space(self.space, snapshot, entity, sqt.translation, |p| {
            region.clamp(p)
        }) {
            Some(translation) => {
                sqt.translation = translation;
                MutateOutcome::Applied
            }
            None => MutateOutcome::NotApplied,
        }
    }
}

/// System owning all stay-in-box mutators, one registry entry per entity.
///
/// `create`/`destroy` are the lifecycle hooks the entity registry drives at
/// configuration and teardown time; dispatch goes through `SqtMutator`.
#[derive(Debug, Default)]
pub struct StayInBoxSystem {
    mutators: MutatorRegistry<StayInBoxMutator>,
}

impl StayInBoxSystem {
    pub fn new() -> Self {
        Self {
            mutators: MutatorRegistry::new(),
        }
    }

    /// Attach one mutator built from a definition.
    ///
    /// Validation failures surface here, at attach time; the entity ends up
    /// without a mutator for that slot.
    pub fn create(&mut self, entity: EntityId, def: &MutatorDef) -> Result<()> {
        let mutator = StayInBoxMutator::from_def(def)?;
        self.mutators.attach(entity, def.slot(), mutator);
        Ok(())
    }

    /// Parse a TOML definition payload and attach every mutator in it.
    /// Returns how many were attached.
    pub fn create_from_toml(&mut self, entity: EntityId, content: &str) -> Result<usize> {
        let file: MutatorFile = toml::from_str(content)?;
        for def in &file.mutator {
            self.create(entity, def)?;
        }
        Ok(file.mutator.len())
    }

    /// Detach all mutators for an entity. No-op when none are attached.
    pub fn destroy(&mut self, entity: EntityId) {
        self.mutators.detach(entity);
    }

    /// Total number of attached mutators
    pub fn mutator_count(&self) -> usize {
        self.mutators.len()
    }
}

impl SqtMutator for StayInBoxSystem {
    fn name(&self) -> &str {
        "stay_in_box"
    }

    fn slots(&self, entity: EntityId) -> Vec<SlotKey> {
        self.mutators.slots(entity)
    }

    fn mutate(
        &self,
        entity: EntityId,
        group: HashValue,
        order: i32,
        sqt: &mut Sqt,
        snapshot: &HierarchySnapshot,
        require_valid: bool,
    ) -> Result<MutateOutcome> {
        match self.mutators.find(entity, SlotKey::new(group, order)) {
            Some(mutator) => Ok(mutator.apply(entity, snapshot, sqt)),
            None if require_valid => Err(EmberError::MissingMutator {
                entity,
                group,
                order,
            }),
            None => Ok(MutateOutcome::NotApplied),
        }
    }
}
