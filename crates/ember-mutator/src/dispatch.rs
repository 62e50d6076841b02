//! Sqt mutation dispatch across registered constraint systems

use crate::space::HierarchySnapshot;
use crate::types::SlotKey;
use ember_core::{EmberError, EntityId, HashValue, Result, Sqt};

/// Whether a dispatch call actually adjusted the transform.
///
/// Distinct from call failure: a missing mutator under a best-effort policy
/// is `NotApplied`, not an error. Callers chaining several mutator systems
/// per slot stop at the first `Applied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutateOutcome {
    Applied,
    NotApplied,
}

impl MutateOutcome {
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Contract implemented by every constraint kind.
///
/// One implementor owns all instances of its kind across entities and
/// answers dispatch for the `(group, order)` slots it has registered.
pub trait SqtMutator {
    /// Human-readable name for this constraint kind
    fn name(&self) -> &str;

    /// Slot keys this system has registered for an entity, sorted by
    /// `(order, group)`
    fn slots(&self, entity: EntityId) -> Vec<SlotKey>;

    /// Apply the mutator matching `(group, order)` to `sqt` in place.
    ///
    /// With no match, `require_valid = true` fails with `MissingMutator`
    /// and `require_valid = false` reports `NotApplied`; the transform is
    /// untouched either way.
    fn mutate(
        &self,
        entity: EntityId,
        group: HashValue,
        order: i32,
        sqt: &mut Sqt,
        snapshot: &HierarchySnapshot,
        require_valid: bool,
    ) -> Result<MutateOutcome>;
}

/// Ordered collection of constraint systems sharing the per-entity slot
/// space.
///
/// The hierarchy pass calls `mutate` once per registered slot between
/// computing an entity's base transform and propagating it to children.
#[derive(Default)]
pub struct MutatorDispatcher {
    systems: Vec<Box<dyn SqtMutator>>,
}

impl MutatorDispatcher {
    /// Create a dispatcher with no systems registered
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Register a constraint system. Registration order is probe order.
    pub fn register(&mut self, system: Box<dyn SqtMutator>) {
        self.systems.push(system);
    }

    /// Number of registered constraint systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Mutate one slot of an entity's transform.
    ///
    /// Systems are probed best-effort in registration order and the first
    /// one that applies claims the slot. The caller's `require_valid`
    /// policy is enforced after the chain, so one system lacking a match
    /// never aborts the probe of the rest.
    pub fn mutate(
        &self,
        entity: EntityId,
        group: HashValue,
        order: i32,
        sqt: &mut Sqt,
        snapshot: &HierarchySnapshot,
        require_valid: bool,
    ) -> Result<MutateOutcome> {
        for system in &self.systems {
            if system
                .mutate(entity, group, order, sqt, snapshot, false)?
                .applied()
            {
                return Ok(MutateOutcome::Applied);
            }
        }

        if require_valid {
            return Err(EmberError::MissingMutator {
                entity,
                group,
                order,
            });
        }
        Ok(MutateOutcome::NotApplied)
    }

    /// Run every slot registered for an entity, in `(order, group)` order,
    /// and return how many applied.
    pub fn apply_all(
        &self,
        entity: EntityId,
        sqt: &mut Sqt,
        snapshot: &HierarchySnapshot,
    ) -> Result<usize> {
        let mut slots: Vec<SlotKey> = self
            .systems
            .iter()
            .flat_map(|s| s.slots(entity))
            .collect();
        slots.sort();
        slots.dedup();

        let mut applied = 0;
        for slot in slots {
            if self
                .mutate(entity, slot.group, slot.order, sqt, snapshot, false)?
                .applied()
            {
                applied += 1;
            }
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    /// Test double that claims a single slot and pins x to a fixed value
    struct PinX {
        slot: SlotKey,
        x: f32,
    }

    impl SqtMutator for PinX {
        fn name(&self) -> &str {
            "pin_x"
        }

        fn slots(&self, _entity: EntityId) -> Vec<SlotKey> {
            vec![self.slot]
        }

        fn mutate(
            &self,
            entity: EntityId,
            group: HashValue,
            order: i32,
            sqt: &mut Sqt,
            _snapshot: &HierarchySnapshot,
            require_valid: bool,
        ) -> Result<MutateOutcome> {
            if SlotKey::new(group, order) != self.slot {
                if require_valid {
                    return Err(EmberError::MissingMutator {
                        entity,
                        group,
                        order,
                    });
                }
                return Ok(MutateOutcome::NotApplied);
            }
            sqt.translation.x = self.x;
            Ok(MutateOutcome::Applied)
        }
    }

    fn slot(group: &str, order: i32) -> SlotKey {
        SlotKey::new(HashValue::of(group), order)
    }

    #[test]
    fn test_first_applying_system_claims_slot() {
        let mut dispatcher = MutatorDispatcher::new();
        let key = slot("placement", 0);
        dispatcher.register(Box::new(PinX { slot: key, x: 1.0 }));
        dispatcher.register(Box::new(PinX { slot: key, x: 2.0 }));

        let entity = EntityId::from_raw(1);
        let snapshot = HierarchySnapshot::new();
        let mut sqt = Sqt::IDENTITY;

        let outcome = dispatcher
            .mutate(entity, key.group, key.order, &mut sqt, &snapshot, false)
            .unwrap();
        assert!(outcome.applied());
        assert_eq!(sqt.translation.x, 1.0);
    }

    #[test]
    fn test_missing_slot_require_valid() {
        let dispatcher = MutatorDispatcher::new();
        let entity = EntityId::from_raw(1);
        let snapshot = HierarchySnapshot::new();
        let mut sqt = Sqt::from_translation(Vec3::new(5.0, 0.0, 0.0));

        let err = dispatcher
            .mutate(entity, HashValue::of("g"), 3, &mut sqt, &snapshot, true)
            .unwrap_err();
        assert!(matches!(err, EmberError::MissingMutator { order: 3, .. }));
        assert_eq!(sqt.translation, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_missing_slot_best_effort() {
        let dispatcher = MutatorDispatcher::new();
        let entity = EntityId::from_raw(1);
        let snapshot = HierarchySnapshot::new();
        let mut sqt = Sqt::from_translation(Vec3::new(5.0, 0.0, 0.0));

        let outcome = dispatcher
            .mutate(entity, HashValue::of("g"), 3, &mut sqt, &snapshot, false)
            .unwrap();
        assert_eq!(outcome, MutateOutcome::NotApplied);
        assert_eq!(sqt.translation, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_later_system_claims_unmatched_slot() {
        let mut dispatcher = MutatorDispatcher::new();
        dispatcher.register(Box::new(PinX {
            slot: slot("a", 0),
            x: 1.0,
        }));
        dispatcher.register(Box::new(PinX {
            slot: slot("b", 0),
            x: 2.0,
        }));

        let entity = EntityId::from_raw(1);
        let snapshot = HierarchySnapshot::new();
        let mut sqt = Sqt::IDENTITY;

        let outcome = dispatcher
            .mutate(entity, HashValue::of("b"), 0, &mut sqt, &snapshot, true)
            .unwrap();
        assert!(outcome.applied());
        assert_eq!(sqt.translation.x, 2.0);
    }

    #[test]
    fn test_apply_all_runs_slots_in_order() {
        let mut dispatcher = MutatorDispatcher::new();
        // Later order overwrites x after the earlier one
        dispatcher.register(Box::new(PinX {
            slot: slot("late", 5),
            x: 9.0,
        }));
        dispatcher.register(Box::new(PinX {
            slot: slot("early", 1),
            x: 4.0,
        }));

        let entity = EntityId::from_raw(1);
        let snapshot = HierarchySnapshot::new();
        let mut sqt = Sqt::IDENTITY;

        let applied = dispatcher.apply_all(entity, &mut sqt, &snapshot).unwrap();
        assert_eq!(applied, 2);
        assert_eq!(sqt.translation.x, 9.0);
    }

    #[test]
    fn test_apply_all_without_slots() {
        let dispatcher = MutatorDispatcher::new();
        let entity = EntityId::from_raw(1);
        let snapshot = HierarchySnapshot::new();
        let mut sqt = Sqt::IDENTITY;

        assert_eq!(dispatcher.apply_all(entity, &mut sqt, &snapshot).unwrap(), 0);
        assert_eq!(sqt, Sqt::IDENTITY);
    }
}
