//! Rigid bodies

use bitflags::bitflags;
use lilypad_math::Vec3;
use slotmap::new_key_type;

use crate::material::MaterialProperties;
use crate::shapes::CollisionShape;

new_key_type! {
    /// Generational handle to a body in a [`crate::world::PhysicsWorld`]
    ///
    /// Stays invalid forever once the body is removed; lookups with a
    /// stale key return `None` rather than aliasing a new body.
    pub struct BodyKey;
}

bitflags! {
    /// Collision filter groups
    ///
    /// Two bodies interact only when each one's `groups` intersects
    /// the other's `mask`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CollisionGroups: u32 {
        const STATIC  = 1 << 0;
        const DYNAMIC = 1 << 1;
        const PLAYER  = 1 << 2;
        const SENSOR  = 1 << 3;
        const ALL     = u32::MAX;
    }
}

impl Default for CollisionGroups {
    fn default() -> Self {
        CollisionGroups::ALL
    }
}

/// A shape and the surface material bound to it
#[derive(Clone, Debug)]
pub struct BodyPrimitive {
    pub shape: CollisionShape,
    pub material: MaterialProperties,
}

/// A simulated body: a position, a velocity and a set of world-space
/// collision primitives
///
/// Mass at or below zero marks the body static: it never integrates
/// and only serves as collision geometry for dynamic bodies.
#[derive(Clone, Debug)]
pub struct RigidBody {
    pub position: Vec3,
    pub velocity: Vec3,
    mass: f32,
    is_static: bool,
    pub affected_by_gravity: bool,
    pub groups: CollisionGroups,
    pub mask: CollisionGroups,
    primitives: Vec<BodyPrimitive>,
}

impl RigidBody {
    /// Create a body at a position with the given mass
    ///
    /// Non-positive mass means static.
    pub fn new(position: Vec3, mass: f32) -> Self {
        let is_static = mass <= 0.0;
        Self {
            position,
            velocity: Vec3::ZERO,
            mass,
            is_static,
            affected_by_gravity: !is_static,
            groups: if is_static {
                CollisionGroups::STATIC
            } else {
                CollisionGroups::DYNAMIC
            },
            mask: CollisionGroups::ALL,
            primitives: Vec::new(),
        }
    }

    /// Static geometry-only body
    pub fn new_static(position: Vec3) -> Self {
        Self::new(position, 0.0)
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_groups(mut self, groups: CollisionGroups, mask: CollisionGroups) -> Self {
        self.groups = groups;
        self.mask = mask;
        self
    }

    /// Attach a world-space primitive with its surface material
    pub fn add_primitive(&mut self, shape: CollisionShape, material: MaterialProperties) {
        self.primitives.push(BodyPrimitive { shape, material });
    }

    pub fn with_primitive(mut self, shape: CollisionShape, material: MaterialProperties) -> Self {
        self.add_primitive(shape, material);
        self
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn primitives(&self) -> &[BodyPrimitive] {
        &self.primitives
    }

    /// Whether this body's filter accepts the other and vice versa
    pub fn interacts_with(&self, other: &RigidBody) -> bool {
        self.mask.intersects(other.groups) && other.mask.intersects(self.groups)
    }

    /// Move the body and all its primitives by a delta
    pub(crate) fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        for p in &mut self.primitives {
            p.shape = p.shape.translated(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Cuboid, Plane};

    #[test]
    fn test_non_positive_mass_is_static() {
        assert!(RigidBody::new(Vec3::ZERO, 0.0).is_static());
        assert!(RigidBody::new(Vec3::ZERO, -3.0).is_static());
        assert!(!RigidBody::new(Vec3::ZERO, 1.0).is_static());
    }

    #[test]
    fn test_default_groups_follow_staticness() {
        let s = RigidBody::new_static(Vec3::ZERO);
        let d = RigidBody::new(Vec3::ZERO, 1.0);
        assert_eq!(s.groups, CollisionGroups::STATIC);
        assert_eq!(d.groups, CollisionGroups::DYNAMIC);
        assert!(s.interacts_with(&d));
    }

    #[test]
    fn test_disjoint_masks_do_not_interact() {
        let a = RigidBody::new(Vec3::ZERO, 1.0)
            .with_groups(CollisionGroups::PLAYER, CollisionGroups::STATIC);
        let b = RigidBody::new(Vec3::ZERO, 1.0)
            .with_groups(CollisionGroups::SENSOR, CollisionGroups::DYNAMIC);
        assert!(!a.interacts_with(&b));
    }

    #[test]
    fn test_translate_moves_primitives() {
        let mut body = RigidBody::new_static(Vec3::ZERO).with_primitive(
            crate::shapes::CollisionShape::Cuboid(Cuboid::new(Vec3::ZERO, Vec3::ONE)),
            MaterialProperties::default(),
        );
        body.add_primitive(
            crate::shapes::CollisionShape::Plane(Plane::floor(0.0)),
            MaterialProperties::default(),
        );
        body.translate(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(body.position, Vec3::new(0.0, 2.0, 0.0));
        match &body.primitives()[0].shape {
            crate::shapes::CollisionShape::Cuboid(c) => {
                assert_eq!(c.center, Vec3::new(0.0, 2.0, 0.0))
            }
            _ => panic!("expected cuboid"),
        }
    }
}
