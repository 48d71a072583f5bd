//! Physics world: body storage and the simulation step
//!
//! Intentionally a small solver. Dynamic bodies integrate under
//! gravity and are resolved against static geometry only; dynamic
//! pairs pass through each other. That is enough for a platformer
//! player and pickup props over level geometry.

use lilypad_math::Vec3;
use log::trace;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::body::{BodyKey, RigidBody};
use crate::collision::{capsule_vs_shape, cuboid_vs_shape, Contact};
use crate::material::MaterialProperties;
use crate::shapes::CollisionShape;

/// Tangential damping rate applied under dynamic friction
const FRICTION_RATE: f32 = 8.0;
/// Below this tangential speed static friction pins the body
const STATIC_SPEED_CUTOFF: f32 = 0.05;
/// Impact speed below which restitution is ignored to avoid jitter
const BOUNCE_THRESHOLD: f32 = 0.5;

/// Tunable simulation parameters
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Acceleration along -Y in units per second squared
    pub gravity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: 20.0 }
    }
}

/// Owns all rigid bodies and advances the simulation
pub struct PhysicsWorld {
    bodies: SlotMap<BodyKey, RigidBody>,
    config: PhysicsConfig,
}

impl PhysicsWorld {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            config,
        }
    }

    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body; stale keys are a no-op returning `None`
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        self.bodies.remove(key)
    }

    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Teleport a body and its primitives to a new position
    ///
    /// Used by the engine to push controller-driven transform moves
    /// into the simulation before a step. Stale keys are a no-op.
    pub fn set_body_position(&mut self, key: BodyKey, position: Vec3) -> bool {
        match self.bodies.get_mut(key) {
            Some(body) => {
                let delta = position - body.position;
                body.translate(delta);
                true
            }
            None => false,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integrate(dt);
        self.resolve_contacts(dt);
    }

    fn integrate(&mut self, dt: f32) {
        let gravity = Vec3::new(0.0, -self.config.gravity, 0.0);
        for (_, body) in self.bodies.iter_mut() {
            if body.is_static() {
                continue;
            }
            if body.affected_by_gravity {
                body.velocity += gravity * dt;
            }
            let delta = body.velocity * dt;
            body.translate(delta);
        }
    }

    fn resolve_contacts(&mut self, dt: f32) {
        let dynamic_keys: Vec<BodyKey> = self
            .bodies
            .iter()
            .filter(|(_, b)| !b.is_static())
            .map(|(k, _)| k)
            .collect();
        let static_keys: Vec<BodyKey> = self
            .bodies
            .iter()
            .filter(|(_, b)| b.is_static())
            .map(|(k, _)| k)
            .collect();

        for dyn_key in dynamic_keys {
            // Deepest contact per static body, gathered immutably
            let mut hits: Vec<(Contact, MaterialProperties)> = Vec::new();
            {
                let body = &self.bodies[dyn_key];
                for &stat_key in &static_keys {
                    let stat = &self.bodies[stat_key];
                    if !body.interacts_with(stat) {
                        continue;
                    }
                    let mut best: Option<(Contact, MaterialProperties)> = None;
                    for dp in body.primitives() {
                        for sp in stat.primitives() {
                            let contact = match &dp.shape {
                                CollisionShape::Capsule(c) => capsule_vs_shape(c, &sp.shape),
                                CollisionShape::Cuboid(c) => cuboid_vs_shape(c, &sp.shape),
                                _ => None,
                            };
                            if let Some(c) = contact {
                                if best
                                    .as_ref()
                                    .map_or(true, |(b, _)| c.penetration > b.penetration)
                                {
                                    best = Some((c, dp.material.combine(&sp.material)));
                                }
                            }
                        }
                    }
                    if let Some(hit) = best {
                        hits.push(hit);
                    }
                }
            }

            if hits.is_empty() {
                continue;
            }
            let body = &mut self.bodies[dyn_key];
            for (contact, material) in hits {
                trace!(
                    "contact at {:?} depth {:.4} on body {:?}",
                    contact.point,
                    contact.penetration,
                    dyn_key
                );
                Self::apply_contact(body, &contact, &material, dt);
            }
        }
    }

    fn apply_contact(
        body: &mut RigidBody,
        contact: &Contact,
        material: &MaterialProperties,
        dt: f32,
    ) {
        // Positional correction first so the response sees the body
        // on the surface
        body.translate(contact.normal * contact.penetration);

        let vn = body.velocity.dot(contact.normal);
        if vn >= 0.0 {
            return;
        }
        let mut tangent = body.velocity - contact.normal * vn;

        let normal_out = if -vn > BOUNCE_THRESHOLD {
            contact.normal * (-vn * material.restitution)
        } else {
            Vec3::ZERO
        };

        let speed = tangent.length();
        if speed < STATIC_SPEED_CUTOFF + material.static_friction * 0.1 {
            tangent = Vec3::ZERO;
        } else {
            tangent = tangent * (-material.dynamic_friction * FRICTION_RATE * dt).exp();
        }

        body.velocity = tangent + normal_out;
    }
}
