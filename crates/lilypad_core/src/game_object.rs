//! Game objects: named, typed nodes owning a transform and components
//!
//! Levels are built from archetypes: a template object constructed
//! once and deep-cloned per placement. `Clone` copies the transform
//! and every component by value, so mutating a clone never touches the
//! archetype. That independence is the core correctness property of
//! the whole object model.

use crate::component::{Camera, Collider, Component, ComponentKind, UpdateContext};
use crate::transform::Transform;

/// Closed set of object kinds, used for collision filtering and
/// gameplay dispatch through predicates, never through subtyping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameObjectKind {
    Camera,
    Player,
    Ground,
    Platform,
    Skybox,
    Interactable,
    Consumable,
    Tree,
    Rock,
    Sign,
    Decoration,
}

impl GameObjectKind {
    /// Whether picking/interaction rays may select this kind
    pub fn is_pickable(&self) -> bool {
        matches!(self, GameObjectKind::Interactable | GameObjectKind::Consumable)
    }

    /// Whether this kind usually carries static level geometry
    pub fn is_level_geometry(&self) -> bool {
        matches!(
            self,
            GameObjectKind::Ground
                | GameObjectKind::Platform
                | GameObjectKind::Tree
                | GameObjectKind::Rock
                | GameObjectKind::Sign
        )
    }
}

/// A scene-graph node
#[derive(Clone, Debug)]
pub struct GameObject {
    pub name: String,
    kind: GameObjectKind,
    is_archetype: bool,
    pub transform: Transform,
    components: Vec<Component>,
}

impl GameObject {
    pub fn new(name: impl Into<String>, kind: GameObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_archetype: false,
            transform: Transform::new(),
            components: Vec::new(),
        }
    }

    /// A template object built once and cloned per placement
    pub fn archetype(name: impl Into<String>, kind: GameObjectKind) -> Self {
        let mut object = Self::new(name, kind);
        object.is_archetype = true;
        object
    }

    /// Kind is fixed at construction
    pub fn kind(&self) -> GameObjectKind {
        self.kind
    }

    pub fn is_archetype(&self) -> bool {
        self.is_archetype
    }

    /// Append a component; insertion order is update and draw order
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.add_component(component);
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    /// First camera component, if any
    pub fn camera(&self) -> Option<&Camera> {
        self.components.iter().find_map(|c| c.as_camera())
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.components.iter().find_map(|c| c.as_collider())
    }

    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.components.iter_mut().find_map(|c| c.as_collider_mut())
    }

    /// Run enabled behaviours in insertion order
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let transform = &mut self.transform;
        for component in &mut self.components {
            if !component.enabled {
                continue;
            }
            if let ComponentKind::Behaviour(behaviour) = &mut component.kind {
                behaviour.update(transform, ctx);
            }
        }
    }
}
