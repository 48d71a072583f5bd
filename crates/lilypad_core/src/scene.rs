//! Scene: the ordered collection of game objects for one level
//!
//! Objects update in the order they were added; cameras register in a
//! name list in insertion order, and the first camera added becomes
//! the main camera unless explicitly overridden. The scene owns an
//! optional physics world and synchronizes dynamic body positions back
//! onto transforms each frame.

use log::{error, warn};

use lilypad_physics::PhysicsWorld;

use crate::component::{ComponentKind, RenderBackend, UpdateContext};
use crate::game_object::{GameObject, GameObjectKind};
use crate::input::InputState;
use crate::scene_manager::SceneError;

/// Lifecycle of a scene
///
/// `Empty -> Populated -> Loaded -> Unloaded`; loading skips nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    Empty,
    Populated,
    Loaded,
    Unloaded,
}

pub struct Scene {
    objects: Vec<GameObject>,
    /// Camera object names in insertion order
    camera_names: Vec<String>,
    main_camera: Option<usize>,
    physics: Option<PhysicsWorld>,
    state: SceneState,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            camera_names: Vec::new(),
            main_camera: None,
            physics: None,
            state: SceneState::Empty,
        }
    }

    pub fn with_physics(physics: PhysicsWorld) -> Self {
        let mut scene = Self::new();
        scene.physics = Some(physics);
        scene
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn physics(&self) -> Option<&PhysicsWorld> {
        self.physics.as_ref()
    }

    pub fn physics_mut(&mut self) -> Option<&mut PhysicsWorld> {
        self.physics.as_mut()
    }

    /// Append a game object; camera-kind objects join the camera
    /// registry, and the first camera added becomes main
    pub fn add(&mut self, object: GameObject) {
        if object.kind() == GameObjectKind::Camera {
            if object.camera().is_some() {
                self.camera_names.push(object.name.clone());
                if self.main_camera.is_none() {
                    self.main_camera = Some(self.camera_names.len() - 1);
                }
            } else {
                warn!(
                    "camera-kind object '{}' has no camera component; not registered",
                    object.name
                );
            }
        }
        self.objects.push(object);
        if self.state == SceneState::Empty {
            self.state = SceneState::Populated;
        }
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    pub fn find(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn main_camera_name(&self) -> Option<&str> {
        self.main_camera
            .map(|i| self.camera_names[i].as_str())
    }

    /// Override the main camera by name
    ///
    /// Unknown names leave the previous main camera in place, return
    /// `false` and log a warning.
    pub fn set_main_camera(&mut self, name: &str) -> bool {
        match self.camera_names.iter().position(|n| n == name) {
            Some(index) => {
                self.main_camera = Some(index);
                true
            }
            None => {
                warn!("no camera named '{}' registered; main camera unchanged", name);
                false
            }
        }
    }

    /// Advance the main camera to the next registered camera in
    /// insertion order, wrapping after the last
    pub fn cycle_cameras(&mut self) -> Option<&str> {
        let current = self.main_camera?;
        let next = (current + 1) % self.camera_names.len();
        self.main_camera = Some(next);
        Some(self.camera_names[next].as_str())
    }

    /// One frame: transform-to-body sync, physics step, body-to-
    /// transform sync, component pass, spawn drain
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if let Some(physics) = &mut self.physics {
            // Push controller-driven transform moves into the bodies
            // before stepping, then read resolved positions back
            for object in &self.objects {
                let Some(key) = object.collider().and_then(|c| c.body_key()) else {
                    continue;
                };
                let Some(body) = physics.get_body(key) else { continue };
                if !body.is_static() && body.position != object.transform.translation {
                    physics.set_body_position(key, object.transform.translation);
                }
            }

            physics.step(dt);
            for object in &mut self.objects {
                let key = object.collider().and_then(|c| c.body_key());
                let Some(key) = key else { continue };
                let Some(body) = physics.get_body(key) else { continue };
                if body.is_static() {
                    continue;
                }
                if body.position.is_finite() {
                    object.transform.translation = body.position;
                } else {
                    error!(
                        "non-finite physics position for '{}'; transform left unchanged",
                        object.name
                    );
                }
            }
        }

        // Mid-update additions are buffered and applied here, after
        // the pass, so the object list is never mutated while it is
        // being iterated
        let mut spawned = Vec::new();
        {
            let mut ctx = UpdateContext::new(dt, input, &mut spawned);
            for object in &mut self.objects {
                object.update(&mut ctx);
            }
        }
        for object in spawned {
            self.add(object);
        }
    }

    /// Submit every enabled renderer in order
    pub fn draw(&self, backend: &mut dyn RenderBackend) {
        for object in &self.objects {
            for component in object.components() {
                if !component.enabled {
                    continue;
                }
                if let ComponentKind::Renderer(renderer) = &component.kind {
                    backend.draw_mesh(
                        &renderer.mesh,
                        &renderer.material,
                        &object.transform.world_matrix(),
                    );
                }
            }
        }
    }

    /// Populated -> Loaded; loading an empty scene is an error
    pub(crate) fn mark_loaded(&mut self, name: &str) -> Result<(), SceneError> {
        match self.state {
            SceneState::Populated => {
                if self.main_camera.is_none() {
                    warn!("scene '{}' loaded with no cameras registered", name);
                }
                self.state = SceneState::Loaded;
                Ok(())
            }
            SceneState::Empty => Err(SceneError::EmptyScene(name.to_string())),
            SceneState::Loaded => Ok(()),
            SceneState::Unloaded => Err(SceneError::AlreadyUnloaded(name.to_string())),
        }
    }

    /// Tear down: objects are dropped, bodies removed from the physics
    /// world
    pub(crate) fn unload(&mut self) {
        if let Some(physics) = &mut self.physics {
            for object in &mut self.objects {
                if let Some(collider) = object.collider_mut() {
                    collider.disable(physics);
                }
            }
        }
        self.objects.clear();
        self.camera_names.clear();
        self.main_camera = None;
        self.state = SceneState::Unloaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MeshData;
    use crate::component::{
        Behaviour, Camera, Collider, Component, MeshRenderer, RenderMaterial,
    };
    use crate::transform::Transform;
    use lilypad_math::{Mat4, Vec3};
    use lilypad_physics::{Capsule, CollisionShape, MaterialProperties, PhysicsConfig, Plane};

    fn camera_object(name: &str) -> GameObject {
        GameObject::new(name, GameObjectKind::Camera).with_component(Component::camera(Camera::default()))
    }

    #[test]
    fn test_first_camera_added_becomes_main_not_first_object() {
        let mut scene = Scene::new();
        scene.add(GameObject::new("platform", GameObjectKind::Platform));
        scene.add(camera_object("cam_a"));
        scene.add(camera_object("cam_b"));
        assert_eq!(scene.main_camera_name(), Some("cam_a"));
    }

    #[test]
    fn test_cycle_cameras_wraps_in_insertion_order() {
        let mut scene = Scene::new();
        scene.add(camera_object("a"));
        scene.add(camera_object("b"));
        scene.add(camera_object("c"));
        assert_eq!(scene.cycle_cameras(), Some("b"));
        assert_eq!(scene.cycle_cameras(), Some("c"));
        assert_eq!(scene.cycle_cameras(), Some("a"));
    }

    #[test]
    fn test_set_main_camera_unknown_name_keeps_previous() {
        let mut scene = Scene::new();
        scene.add(camera_object("a"));
        scene.add(camera_object("b"));
        assert!(scene.set_main_camera("b"));
        assert!(!scene.set_main_camera("ghost"));
        assert_eq!(scene.main_camera_name(), Some("b"));
    }

    #[test]
    fn test_lifecycle_progression() {
        let mut scene = Scene::new();
        assert_eq!(scene.state(), SceneState::Empty);
        assert!(scene.mark_loaded("level").is_err());

        scene.add(GameObject::new("ground", GameObjectKind::Ground));
        assert_eq!(scene.state(), SceneState::Populated);
        assert!(scene.mark_loaded("level").is_ok());
        assert_eq!(scene.state(), SceneState::Loaded);

        scene.unload();
        assert_eq!(scene.state(), SceneState::Unloaded);
        assert!(scene.objects().is_empty());
    }

    #[test]
    fn test_update_syncs_dynamic_body_position() {
        let mut scene = Scene::with_physics(PhysicsWorld::new(PhysicsConfig::default()));

        let mut ground = GameObject::new("ground", GameObjectKind::Ground);
        let mut ground_collider = Collider::new();
        ground_collider.add_primitive(
            CollisionShape::Plane(Plane::floor(0.0)),
            MaterialProperties::GRASS,
        );
        ground.add_component(Component::collider(ground_collider));

        let start = Vec3::new(0.0, 5.0, 0.0);
        let mut crate_object = GameObject::new("crate", GameObjectKind::Interactable);
        crate_object.transform = Transform::new().with_translation(start);
        let mut crate_collider = Collider::new();
        crate_collider.add_primitive(
            CollisionShape::Capsule(Capsule::new(start, 0.5, 0.5)),
            MaterialProperties::WOOD,
        );
        crate_object.add_component(Component::collider(crate_collider));

        // Enable against the scene's physics world before adding
        {
            let physics = scene.physics_mut().unwrap();
            let ground_transform = ground.transform;
            ground
                .collider_mut()
                .unwrap()
                .enable(&ground_transform, physics, true, 0.0);
            let crate_transform = crate_object.transform;
            crate_object
                .collider_mut()
                .unwrap()
                .enable(&crate_transform, physics, true, 2.0);
        }
        scene.add(ground);
        scene.add(crate_object);

        let input = InputState::new();
        scene.update(1.0 / 60.0, &input);

        let fallen = scene.find("crate").unwrap().transform.translation;
        assert!(fallen.y < start.y);
        // Static body never synced
        assert_eq!(scene.find("ground").unwrap().transform.translation, Vec3::ZERO);
    }

    #[test]
    fn test_transform_moves_reach_the_body() {
        let mut scene = Scene::with_physics(PhysicsWorld::new(PhysicsConfig::default()));

        let start = Vec3::new(0.0, 1.0, 0.0);
        let mut player = GameObject::new("player", GameObjectKind::Player);
        player.transform = Transform::new().with_translation(start);
        let mut collider = Collider::new();
        collider.add_primitive(
            CollisionShape::Capsule(Capsule::new(start, 0.5, 0.5)),
            MaterialProperties::default(),
        );
        player.add_component(Component::collider(collider));
        {
            let physics = scene.physics_mut().unwrap();
            let transform = player.transform;
            player
                .collider_mut()
                .unwrap()
                .enable(&transform, physics, true, 60.0);
        }
        scene.add(player);

        let input = InputState::new();
        scene.update(1.0 / 60.0, &input);

        // A controller-style direct move between frames
        scene.find_mut("player").unwrap().transform.translate(2.0, 0.0, 0.0);
        scene.update(1.0 / 60.0, &input);

        let key = scene
            .find("player")
            .unwrap()
            .collider()
            .unwrap()
            .body_key()
            .unwrap();
        let body_x = scene.physics().unwrap().get_body(key).unwrap().position.x;
        assert!((body_x - 2.0).abs() < 0.001, "body x = {}", body_x);
    }

    #[derive(Default)]
    struct RecordingBackend {
        submissions: Vec<(usize, Vec3)>,
    }

    impl RenderBackend for RecordingBackend {
        fn draw_mesh(&mut self, mesh: &MeshData, _material: &RenderMaterial, world: &Mat4) {
            self.submissions.push((mesh.vertices.len(), world.translation()));
        }
    }

    #[test]
    fn test_draw_submits_enabled_renderers_in_order() {
        let mut scene = Scene::new();

        let mut near = GameObject::new("near", GameObjectKind::Platform);
        near.transform.translate(1.0, 0.0, 0.0);
        near.add_component(Component::renderer(MeshRenderer::new(
            MeshData::quad(1.0),
            RenderMaterial::default(),
        )));
        scene.add(near);

        let mut far = GameObject::new("far", GameObjectKind::Platform);
        far.transform.translate(2.0, 0.0, 0.0);
        far.add_component(Component::renderer(MeshRenderer::new(
            MeshData::unit_cube(),
            RenderMaterial::default(),
        )));
        scene.add(far);

        let mut hidden = GameObject::new("hidden", GameObjectKind::Decoration);
        hidden.add_component(Component::renderer(MeshRenderer::new(
            MeshData::quad(1.0),
            RenderMaterial::default(),
        )));
        hidden.components_mut()[0].enabled = false;
        scene.add(hidden);

        let mut backend = RecordingBackend::default();
        scene.draw(&mut backend);

        assert_eq!(
            backend.submissions,
            vec![
                (4, Vec3::new(1.0, 0.0, 0.0)),
                (8, Vec3::new(2.0, 0.0, 0.0)),
            ]
        );
    }

    #[derive(Clone, Debug)]
    struct Spawner {
        done: bool,
    }

    impl Behaviour for Spawner {
        fn update(&mut self, _transform: &mut Transform, ctx: &mut UpdateContext<'_>) {
            if !self.done {
                self.done = true;
                ctx.spawn(GameObject::new("spawned", GameObjectKind::Decoration));
            }
        }

        fn boxed_clone(&self) -> Box<dyn Behaviour> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_spawned_objects_added_after_pass() {
        let mut scene = Scene::new();
        let mut spawner = GameObject::new("spawner", GameObjectKind::Decoration);
        spawner.add_component(Component::behaviour(Spawner { done: false }));
        scene.add(spawner);

        let input = InputState::new();
        scene.update(0.016, &input);
        assert_eq!(scene.objects().len(), 2);
        assert!(scene.find("spawned").is_some());

        // Spawner runs once; no growth on later frames
        scene.update(0.016, &input);
        assert_eq!(scene.objects().len(), 2);
    }
}
