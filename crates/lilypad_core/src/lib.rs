//! Engine core: the scene-graph and component object model
//!
//! Levels are built from archetype [`GameObject`]s that deep-clone per
//! placement, carry [`Transform`]s with partial-update setters, and
//! bind to the physics world through [`Collider`] components. A
//! [`Scene`] owns the ordered object list, the camera registry and an
//! optional physics world; a [`SceneManager`] drives the lifecycle.

pub mod assets;
pub mod component;
pub mod game_object;
pub mod input;
pub mod scene;
pub mod scene_manager;
pub mod transform;

pub use assets::{AssetError, ContentStore, FontHandle, MeshData, ShaderHandle, TextureHandle};
pub use component::{
    Behaviour, Camera, Collider, Component, ComponentKind, FirstPersonController, MeshImport,
    MeshRenderer, PickupBehaviour, RenderBackend, RenderMaterial, UpdateContext,
};
pub use game_object::{GameObject, GameObjectKind};
pub use input::{InputState, Key};
pub use scene::{Scene, SceneState};
pub use scene_manager::{SceneError, SceneManager};
pub use transform::Transform;
