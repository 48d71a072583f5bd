//! lilypad: a component-based 3D platformer engine core
//!
//! Workspace facade re-exporting the engine crates plus the layered
//! application configuration:
//!
//! - [`lilypad_math`]: `Vec3`, `Mat4`
//! - [`lilypad_core`]: transforms, components, game objects, scenes
//! - [`lilypad_physics`]: the rigid-body facade the colliders bind to
//!
//! See `demos/platform_level.rs` for headless level construction.

pub mod config;

pub use config::{AppConfig, ConfigError, DebugConfig, PlayerConfig, WindowConfig};

pub use lilypad_core::{
    assets, component, game_object, input, scene, scene_manager, transform, AssetError, Behaviour,
    Camera, Collider, Component, ComponentKind, ContentStore, FirstPersonController, GameObject,
    GameObjectKind, InputState, Key, MeshData, MeshImport, MeshRenderer, PickupBehaviour,
    RenderBackend, RenderMaterial, Scene, SceneError, SceneManager, SceneState, Transform,
    UpdateContext,
};
pub use lilypad_math::{Mat4, Vec3};
pub use lilypad_physics as physics;
pub use lilypad_physics::{
    BodyKey, Capsule, CollisionGroups, CollisionShape, Cuboid, MaterialProperties, PhysicsConfig,
    PhysicsWorld, Plane, ShapeError, TriangleMesh,
};
