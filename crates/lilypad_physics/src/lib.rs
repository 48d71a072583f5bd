//! Rigid-body physics facade for the lilypad engine
//!
//! The engine core treats the physics solver as a black box behind a
//! narrow interface: register bodies built from collision primitives
//! and material properties, step the simulation, read world positions
//! back. This crate provides:
//!
//! - Collision shapes (plane, cuboid, capsule, static triangle mesh)
//! - Material properties (friction/friction/restitution triples)
//! - Rigid bodies with generational keys
//! - A simple dynamics step with gravity and contact resolution

pub mod body;
pub mod collision;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, BodyPrimitive, CollisionGroups, RigidBody};
pub use collision::Contact;
pub use material::MaterialProperties;
pub use shapes::{Aabb, Capsule, CollisionShape, Cuboid, Plane, ShapeError, TriangleMesh};
pub use world::{PhysicsConfig, PhysicsWorld};
