//! Components: the units of behavior, rendering and physics
//! participation attached to a game object
//!
//! A [`Component`] is an enabled flag around a [`ComponentKind`]
//! tagged union. Every variant deep-clones; behaviours carry a
//! [`Behaviour::boxed_clone`] contract so no box is ever shared
//! between two game objects.

pub mod camera;
pub mod collider;
pub mod controller;
pub mod renderer;

pub use camera::Camera;
pub use collider::{Collider, MeshImport};
pub use controller::{FirstPersonController, PickupBehaviour};
pub use renderer::{MeshRenderer, RenderBackend, RenderMaterial};

use crate::game_object::GameObject;
use crate::input::InputState;
use crate::transform::Transform;

/// Per-frame collaborators handed to behaviours
///
/// Explicit dependency injection: a behaviour sees the frame delta,
/// the polled input snapshot and a spawn buffer, nothing else. Spawned
/// objects are buffered and added to the scene after the update pass.
pub struct UpdateContext<'a> {
    pub dt: f32,
    pub input: &'a InputState,
    spawned: &'a mut Vec<GameObject>,
}

impl<'a> UpdateContext<'a> {
    pub fn new(dt: f32, input: &'a InputState, spawned: &'a mut Vec<GameObject>) -> Self {
        Self { dt, input, spawned }
    }

    /// Queue a game object for addition at the end of the update pass
    pub fn spawn(&mut self, object: GameObject) {
        self.spawned.push(object);
    }
}

/// Per-frame logic attached to a game object
pub trait Behaviour: std::fmt::Debug {
    /// Called once per frame with the owning object's transform
    fn update(&mut self, transform: &mut Transform, ctx: &mut UpdateContext<'_>);

    /// Deep copy for archetype cloning; must copy all state
    fn boxed_clone(&self) -> Box<dyn Behaviour>;
}

impl Clone for Box<dyn Behaviour> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// The closed set of component variants
#[derive(Clone, Debug)]
pub enum ComponentKind {
    Renderer(MeshRenderer),
    Camera(Camera),
    Collider(Collider),
    Behaviour(Box<dyn Behaviour>),
}

/// A component instance owned by exactly one game object
#[derive(Clone, Debug)]
pub struct Component {
    pub enabled: bool,
    pub kind: ComponentKind,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self { enabled: true, kind }
    }

    pub fn renderer(renderer: MeshRenderer) -> Self {
        Self::new(ComponentKind::Renderer(renderer))
    }

    pub fn camera(camera: Camera) -> Self {
        Self::new(ComponentKind::Camera(camera))
    }

    pub fn collider(collider: Collider) -> Self {
        Self::new(ComponentKind::Collider(collider))
    }

    pub fn behaviour(behaviour: impl Behaviour + 'static) -> Self {
        Self::new(ComponentKind::Behaviour(Box::new(behaviour)))
    }

    pub fn as_renderer(&self) -> Option<&MeshRenderer> {
        match &self.kind {
            ComponentKind::Renderer(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_camera(&self) -> Option<&Camera> {
        match &self.kind {
            ComponentKind::Camera(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_collider(&self) -> Option<&Collider> {
        match &self.kind {
            ComponentKind::Collider(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_collider_mut(&mut self) -> Option<&mut Collider> {
        match &mut self.kind {
            ComponentKind::Collider(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Counter {
        ticks: u32,
    }

    impl Behaviour for Counter {
        fn update(&mut self, _transform: &mut Transform, _ctx: &mut UpdateContext<'_>) {
            self.ticks += 1;
        }

        fn boxed_clone(&self) -> Box<dyn Behaviour> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_components_start_enabled() {
        let c = Component::behaviour(Counter { ticks: 0 });
        assert!(c.enabled);
    }

    #[test]
    fn test_behaviour_clone_is_independent() {
        let mut original = Component::behaviour(Counter { ticks: 0 });
        let clone = original.kind.clone();

        let input = InputState::new();
        let mut spawned = Vec::new();
        let mut ctx = UpdateContext::new(0.016, &input, &mut spawned);
        let mut transform = Transform::new();
        if let ComponentKind::Behaviour(b) = &mut original.kind {
            b.update(&mut transform, &mut ctx);
            b.update(&mut transform, &mut ctx);
        }

        let original_ticks = format!("{:?}", original.kind);
        let clone_ticks = format!("{:?}", clone);
        assert!(original_ticks.contains("2"));
        assert!(clone_ticks.contains("0"));
    }
}
