//! Ember Mutator - Incremental transform constraints
//!
//! Constraint rules ("mutators") adjust an entity's local transform every
//! frame, after the base Sqt has been computed by parenting/animation and
//! before it propagates to children. Each constraint kind registers with the
//! `MutatorDispatcher` and is addressed per entity by a `(group, order)`
//! slot key, so several independent rules compose on the same entity in a
//! deterministic order.
//!
//! The stay-in-box kind (clamp a translation inside an axis-aligned box) is
//! the one shipped here; any type implementing `SqtMutator` plugs into the
//! same dispatch slots.

mod dispatch;
mod registry;
mod space;
mod stay_in_box;
mod types;

pub use dispatch::{MutateOutcome, MutatorDispatcher, SqtMutator};
pub use registry::MutatorRegistry;
pub use space::{resolve_in_space, HierarchySnapshot};
pub use stay_in_box::{StayInBoxMutator, StayInBoxSystem};
pub use types::{MutateSpace, MutatorDef, MutatorFile, SlotKey};
