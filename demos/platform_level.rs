//! Headless level construction demo
//!
//! Builds a small platformer level the way a game would: a ground
//! plane, a platform archetype cloned into a staircase, a collidable
//! first-person camera and a spinning crown pickup. Steps the scene
//! for a few seconds and logs where everything ends up.
//!
//! Run with `RUST_LOG=info cargo run --example platform_level`.

use std::error::Error;

use lilypad::{
    AppConfig, Camera, Capsule, Collider, CollisionShape, Component, ContentStore,
    FirstPersonController, GameObject, GameObjectKind, InputState, Key, Mat4, MaterialProperties,
    MeshData, MeshImport, MeshRenderer, PhysicsWorld, PickupBehaviour, Plane, RenderBackend,
    RenderMaterial, Scene, SceneManager, Vec3,
};

/// Stand-in renderer: logs each submission instead of drawing it
struct LogBackend;

impl RenderBackend for LogBackend {
    fn draw_mesh(&mut self, mesh: &MeshData, material: &RenderMaterial, world: &Mat4) {
        log::debug!(
            "draw {} vertices, color {:?}, at {:?}",
            mesh.vertices.len(),
            material.base_color,
            world.translation().to_array()
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("{}; using built-in defaults", e);
        AppConfig::default()
    });

    let mut content = ContentStore::new();
    content.insert_mesh("cube", MeshData::unit_cube());
    content.insert_mesh("platform", MeshData::quad(2.0));

    let mut scene = Scene::with_physics(PhysicsWorld::new(config.physics));

    // Ground: one infinite plane, grassy surface
    let mut ground = GameObject::new("ground", GameObjectKind::Ground);
    let mut ground_collider = Collider::new();
    ground_collider.add_primitive(
        CollisionShape::Plane(Plane::floor(0.0)),
        MaterialProperties::GRASS,
    );
    {
        let physics = scene.physics_mut().ok_or("scene has no physics world")?;
        ground_collider.enable(&ground.transform, physics, true, 0.0);
    }
    ground.add_component(Component::collider(ground_collider));
    scene.add(ground);

    // Platform archetype: rendered quad plus a triangle-mesh collider
    // derived from the same mesh data
    let platform_mesh = content.mesh("platform")?;
    let mut archetype = GameObject::archetype("platform", GameObjectKind::Platform);
    archetype.add_component(Component::renderer(MeshRenderer::new(
        platform_mesh.clone(),
        RenderMaterial::colored(0.5, 0.35, 0.2),
    )));
    let mut archetype_collider = Collider::new();
    archetype_collider.add_triangle_mesh(
        platform_mesh,
        MeshImport::new(),
        MaterialProperties::WOOD,
    );
    archetype.add_component(Component::collider(archetype_collider));

    // Clone the archetype into a staircase; each clone bakes its own
    // collision mesh at its own placement
    for i in 0..5 {
        let mut step = archetype.clone();
        step.name = format!("platform{}", i);
        step.transform.translate(0.0, 1.0 + i as f32, -(4.0 * (i + 1) as f32));
        step.transform.set_scale(Some(1.0 + i as f32 * 0.2), None, None);
        let placed = step.transform;
        if let Some(collider) = step.collider_mut() {
            let physics = scene.physics_mut().ok_or("scene has no physics world")?;
            collider.enable(&placed, physics, true, 0.0);
        }
        scene.add(step);
    }

    // The player: a camera object with a first-person controller and a
    // dynamic capsule body
    let spawn = Vec3::new(0.0, 2.0, 8.0);
    let mut player = GameObject::new("player_cam", GameObjectKind::Camera);
    player.transform.translate(spawn.x, spawn.y, spawn.z);
    player.add_component(Component::camera(Camera::default()));
    player.add_component(Component::behaviour(FirstPersonController {
        move_speed: config.player.move_speed,
        look_speed: config.player.look_speed,
        vertical_speed: config.player.vertical_speed,
    }));
    let mut body = Collider::new();
    body.add_primitive(
        CollisionShape::Capsule(Capsule::new(spawn, 0.4, 0.6)),
        MaterialProperties::default(),
    );
    {
        let physics = scene.physics_mut().ok_or("scene has no physics world")?;
        body.enable(&player.transform, physics, true, 60.0);
    }
    player.add_component(Component::collider(body));
    scene.add(player);

    // A crown to collect, idling with its spin animation
    let mut crown = GameObject::new("crown", GameObjectKind::Consumable);
    crown.transform.translate(0.0, 5.8, -20.0);
    crown.add_component(Component::renderer(MeshRenderer::new(
        content.mesh("cube")?.clone(),
        RenderMaterial::colored(1.0, 0.85, 0.1),
    )));
    crown.add_component(Component::behaviour(PickupBehaviour::new(
        "a well-earned crown",
        100,
    )));
    scene.add(crown);

    let mut manager = SceneManager::new();
    manager.add_scene("level1", scene);
    manager.load_scene("level1")?;
    log::info!(
        "level loaded, main camera: {:?}",
        manager.active_scene().and_then(|s| s.main_camera_name())
    );

    // Walk forward for five seconds of simulated time
    let mut input = InputState::new();
    input.press(Key::W);
    let mut backend = LogBackend;
    let dt = 1.0 / 60.0;
    for frame in 0..300 {
        manager.update(dt, &input);
        if let Some(scene) = manager.active_scene() {
            scene.draw(&mut backend);
        }
        input.end_frame();

        if frame % 60 == 0 || config.debug.log_positions {
            if let Some(scene) = manager.active_scene() {
                for object in scene.objects() {
                    log::info!(
                        "t={:.1}s {} at {:?}",
                        frame as f32 * dt,
                        object.name,
                        object.transform.translation
                    );
                }
            }
        }
    }

    Ok(())
}
