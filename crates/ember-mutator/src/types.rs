//! Mutator type definitions

use ember_core::{Aabb, HashValue};
use serde::{Deserialize, Serialize};

/// The coordinate frame a mutator's geometry is defined in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutateSpace {
    /// The entity's own frame
    Local,
    /// The entity's parent frame, which is also the frame candidate
    /// transforms arrive in
    #[default]
    Parent,
    /// World space, resolved through the frame snapshot
    World,
}

/// Composite key identifying one mutation slot in an entity's pipeline.
///
/// Slots sort by `(order, group)`, which is the order the frame update
/// applies them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub order: i32,
    pub group: HashValue,
}

impl SlotKey {
    pub fn new(group: HashValue, order: i32) -> Self {
        Self { order, group }
    }
}

/// One mutator definition as it appears in configuration.
///
/// Groups are named symbolically here and hashed when the mutator is built;
/// an absent group means the unnamed group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutatorDef {
    #[serde(default)]
    pub space: MutateSpace,
    #[serde(rename = "box")]
    pub bounds: Aabb,
    #[serde(default)]
    pub stretch: Option<Aabb>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl MutatorDef {
    pub fn group_hash(&self) -> HashValue {
        self.group
            .as_deref()
            .map(HashValue::of)
            .unwrap_or(HashValue::UNNAMED)
    }

    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.group_hash(), self.order)
    }
}

/// TOML file format for mutator definitions
#[derive(Debug, Deserialize)]
pub struct MutatorFile {
    pub mutator: Vec<MutatorDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mutator_from_toml() {
        let toml_str = r#"
[[mutator]]
space = "world"
box = { min = [-1.0, -1.0, -1.0], max = [1.0, 1.0, 1.0] }
group = "placement"
order = 2
"#;

        let file: MutatorFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.mutator.len(), 1);
        let def = &file.mutator[0];
        assert_eq!(def.space, MutateSpace::World);
        assert_eq!(def.bounds.min.x, -1.0);
        assert_eq!(def.bounds.max.z, 1.0);
        assert_eq!(def.group.as_deref(), Some("placement"));
        assert_eq!(def.order, 2);
        assert!(def.stretch.is_none());
    }

    #[test]
    fn test_parse_mutator_with_stretch() {
        let toml_str = r#"
[[mutator]]
box = { min = [-1.0, -1.0, -1.0], max = [1.0, 1.0, 1.0] }
stretch = { min = [-2.0, -1.0, -1.0], max = [2.0, 1.0, 1.0] }
"#;

        let file: MutatorFile = toml::from_str(toml_str).unwrap();
        let def = &file.mutator[0];
        let stretch = def.stretch.unwrap();
        assert_eq!(stretch.min.x, -2.0);
        assert_eq!(stretch.max.x, 2.0);
    }

    #[test]
    fn test_defaults() {
        let toml_str = r#"
[[mutator]]
box = { min = [0.0, 0.0, 0.0], max = [1.0, 1.0, 1.0] }
"#;

        let file: MutatorFile = toml::from_str(toml_str).unwrap();
        let def = &file.mutator[0];
        assert_eq!(def.space, MutateSpace::Parent);
        assert_eq!(def.order, 0);
        assert_eq!(def.group_hash(), HashValue::UNNAMED);
    }

    #[test]
    fn test_slot_key_from_def() {
        let toml_str = r#"
[[mutator]]
box = { min = [0.0, 0.0, 0.0], max = [1.0, 1.0, 1.0] }
group = "placement"
order = 3
"#;

        let file: MutatorFile = toml::from_str(toml_str).unwrap();
        let slot = file.mutator[0].slot();
        assert_eq!(slot.group, HashValue::of("placement"));
        assert_eq!(slot.order, 3);
    }

    #[test]
    fn test_slot_keys_sort_by_order_then_group() {
        let a = SlotKey::new(HashValue(2), 0);
        let b = SlotKey::new(HashValue(1), 1);
        let c = SlotKey::new(HashValue(1), 0);

        let mut slots = vec![b, a, c];
        slots.sort();
        assert_eq!(slots, vec![c, a, b]);
    }
}
