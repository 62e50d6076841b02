//! Spatial value types

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A transform as independent scale, rotation, and translation components,
/// relative to an implicit parent frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sqt {
    pub scale: Vec3,
    /// Unit quaternion; re-normalized after composition
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Default for Sqt {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Sqt {
    pub const IDENTITY: Self = Self {
        scale: Vec3::ONE,
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    pub const fn new(scale: Vec3, rotation: Quat, translation: Vec3) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Map a point from this transform's child frame into its parent frame
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (self.scale * point) + self.translation
    }

    /// Map a point from the parent frame back into the child frame.
    /// Requires a non-zero scale on every axis.
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        (self.rotation.inverse() * (point - self.translation)) / self.scale
    }

    /// Compose with a child transform: `self * child`
    pub fn compose(&self, child: &Sqt) -> Sqt {
        Sqt {
            scale: self.scale * child.scale,
            rotation: (self.rotation * child.rotation).normalize(),
            translation: self.transform_point(child.translation),
        }
    }
}

/// An axis-aligned bounding box defined by a minimum and maximum corner.
///
/// A box whose corners coincide is empty; an empty box signals "no
/// constraint" rather than a zero-size region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Both corners coincide
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    /// Non-decreasing min/max on every axis
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Clamp each axis of `point` independently into the box
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Smallest box enclosing both boxes
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
