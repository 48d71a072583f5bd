//! Collider component: binds a game object's geometry to the physics
//! world
//!
//! A collider accumulates primitive definitions (shape + surface
//! material) plus pending triangle-mesh imports, then `enable` bakes
//! the meshes and registers a single body. Cloning a collider copies
//! every definition by value but never the body handle; the clone is
//! not yet part of the simulation.

use lilypad_math::Vec3;
use lilypad_physics::{
    BodyKey, CollisionGroups, CollisionShape, MaterialProperties, PhysicsWorld, RigidBody,
    TriangleMesh,
};
use log::{error, warn};

use crate::assets::MeshData;
use crate::transform::Transform;

/// Placement applied to mesh data when deriving a collision shape
///
/// `translation` and `rotation` are offsets relative to the owning
/// transform. `scale: None` means "use the owning transform's scale at
/// enable time", which keeps visual and collision scale in lockstep by
/// default. Passing `Some` is a deliberate divergence for the rare
/// collider that must not match the rendered size.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshImport {
    pub translation: Vec3,
    /// Euler degrees, X then Y then Z
    pub rotation: Vec3,
    pub scale: Option<Vec3>,
}

impl MeshImport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Explicit collision scale diverging from the visual transform
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }
}

#[derive(Clone, Debug)]
struct PendingMesh {
    mesh: MeshData,
    import: MeshImport,
    material: MaterialProperties,
}

/// Physics participation for one game object
#[derive(Debug)]
pub struct Collider {
    primitives: Vec<(CollisionShape, MaterialProperties)>,
    pending: Vec<PendingMesh>,
    groups: CollisionGroups,
    mask: CollisionGroups,
    body: Option<BodyKey>,
}

impl Default for Collider {
    fn default() -> Self {
        Self::new()
    }
}

// The body handle is deliberately not cloned: a fresh clone has not
// been enabled and owns no simulation state.
impl Clone for Collider {
    fn clone(&self) -> Self {
        Self {
            primitives: self.primitives.clone(),
            pending: self.pending.clone(),
            groups: self.groups,
            mask: self.mask,
            body: None,
        }
    }
}

impl Collider {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            pending: Vec::new(),
            groups: CollisionGroups::ALL,
            mask: CollisionGroups::ALL,
            body: None,
        }
    }

    pub fn with_groups(mut self, groups: CollisionGroups, mask: CollisionGroups) -> Self {
        self.groups = groups;
        self.mask = mask;
        self
    }

    /// Register one ready-made shape, already in world coordinates,
    /// with its surface material
    pub fn add_primitive(&mut self, shape: CollisionShape, material: MaterialProperties) {
        self.primitives.push((shape, material));
    }

    /// Queue a triangle-mesh primitive derived from render-mesh data
    ///
    /// The shape is baked at enable time so an archetype collider can
    /// be cloned first and resolved against each clone's own scale.
    pub fn add_triangle_mesh(
        &mut self,
        mesh: &MeshData,
        import: MeshImport,
        material: MaterialProperties,
    ) {
        self.pending.push(PendingMesh {
            mesh: mesh.clone(),
            import,
            material,
        });
    }

    pub fn primitives(&self) -> &[(CollisionShape, MaterialProperties)] {
        &self.primitives
    }

    /// Total primitive definitions, baked and pending alike
    pub fn primitive_count(&self) -> usize {
        self.primitives.len() + self.pending.len()
    }

    /// Materials across all primitive definitions, baked first
    pub fn materials(&self) -> impl Iterator<Item = &MaterialProperties> {
        self.primitives
            .iter()
            .map(|(_, m)| m)
            .chain(self.pending.iter().map(|p| &p.material))
    }

    pub fn body_key(&self) -> Option<BodyKey> {
        self.body
    }

    pub fn is_enabled(&self) -> bool {
        self.body.is_some()
    }

    /// Bake pending meshes and register the body with the physics
    /// world
    ///
    /// Degenerate or non-finite mesh geometry is logged and skipped,
    /// never repaired; remaining valid primitives still form a body.
    /// `mass <= 0` registers a static body. With
    /// `is_collidable == false` the primitives are baked and kept but
    /// no body is registered; a later call can still enable them.
    pub fn enable(
        &mut self,
        transform: &Transform,
        physics: &mut PhysicsWorld,
        is_collidable: bool,
        mass: f32,
    ) {
        for pending in self.pending.drain(..) {
            let scale = pending.import.scale.unwrap_or(transform.scale);
            match TriangleMesh::with_placement(
                &pending.mesh.vertices,
                &pending.mesh.indices,
                transform.translation + pending.import.translation,
                pending.import.rotation,
                scale,
            ) {
                Ok(mesh) => self
                    .primitives
                    .push((CollisionShape::TriangleMesh(mesh), pending.material)),
                Err(e) => error!("skipping collision mesh primitive: {}", e),
            }
        }

        if !is_collidable {
            return;
        }
        if self.body.is_some() {
            warn!("collider already enabled; ignoring repeated enable");
            return;
        }
        if self.primitives.is_empty() {
            warn!("collider has no valid primitives; no body registered");
            return;
        }

        let mut body =
            RigidBody::new(transform.translation, mass).with_groups(self.groups, self.mask);
        for (shape, material) in &self.primitives {
            body.add_primitive(shape.clone(), *material);
        }
        self.body = Some(physics.add_body(body));
    }

    /// Remove the body from the simulation; primitive definitions are
    /// kept for a later re-enable
    pub fn disable(&mut self, physics: &mut PhysicsWorld) {
        if let Some(key) = self.body.take() {
            physics.remove_body(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilypad_physics::{Capsule, PhysicsConfig, Plane};

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(PhysicsConfig::default())
    }

    #[test]
    fn test_clone_copies_primitives_but_not_body() {
        let mut physics = world();
        let mut collider = Collider::new();
        collider.add_primitive(
            CollisionShape::Plane(Plane::floor(0.0)),
            MaterialProperties::GRASS,
        );
        collider.enable(&Transform::new(), &mut physics, true, 0.0);
        assert!(collider.is_enabled());

        let clone = collider.clone();
        assert_eq!(clone.primitives().len(), 1);
        assert!(clone.body_key().is_none());
    }

    #[test]
    fn test_mass_convention() {
        let mut physics = world();
        let capsule = CollisionShape::Capsule(Capsule::new(Vec3::ZERO, 0.5, 0.5));

        let mut static_collider = Collider::new();
        static_collider.add_primitive(capsule.clone(), MaterialProperties::default());
        static_collider.enable(&Transform::new(), &mut physics, true, 0.0);
        let key = static_collider.body_key().unwrap();
        assert!(physics.get_body(key).unwrap().is_static());

        let mut dynamic_collider = Collider::new();
        dynamic_collider.add_primitive(capsule, MaterialProperties::default());
        dynamic_collider.enable(&Transform::new(), &mut physics, true, 10.0);
        let key = dynamic_collider.body_key().unwrap();
        assert!(!physics.get_body(key).unwrap().is_static());
    }

    #[test]
    fn test_not_collidable_keeps_primitives_without_body() {
        let mut physics = world();
        let mut collider = Collider::new();
        collider.add_primitive(
            CollisionShape::Plane(Plane::floor(0.0)),
            MaterialProperties::default(),
        );
        collider.enable(&Transform::new(), &mut physics, false, 0.0);
        assert_eq!(collider.primitives().len(), 1);
        assert!(!collider.is_enabled());
        assert_eq!(physics.body_count(), 0);

        // Later activation is supported
        collider.enable(&Transform::new(), &mut physics, true, 0.0);
        assert!(collider.is_enabled());
    }

    #[test]
    fn test_mesh_scale_defaults_from_transform() {
        let mut physics = world();
        let transform = Transform::new().with_scale(Vec3::new(3.0, 1.0, 3.0));
        let mut collider = Collider::new();
        collider.add_triangle_mesh(
            &MeshData::quad(1.0),
            MeshImport::new(),
            MaterialProperties::default(),
        );
        collider.enable(&transform, &mut physics, true, 0.0);

        match &collider.primitives()[0].0 {
            CollisionShape::TriangleMesh(m) => {
                assert_eq!(m.aabb().min.x, -3.0);
                assert_eq!(m.aabb().max.z, 3.0);
            }
            other => panic!("expected triangle mesh, got {:?}", other),
        }
    }

    #[test]
    fn test_mesh_baked_at_transform_translation() {
        let mut physics = world();
        let transform = Transform::new().with_translation(Vec3::new(10.0, 2.0, 0.0));
        let mut collider = Collider::new();
        collider.add_triangle_mesh(
            &MeshData::quad(1.0),
            MeshImport::new().at(Vec3::new(0.0, -0.5, 0.0)),
            MaterialProperties::default(),
        );
        collider.enable(&transform, &mut physics, true, 0.0);

        match &collider.primitives()[0].0 {
            CollisionShape::TriangleMesh(m) => {
                assert_eq!(m.aabb().min, Vec3::new(9.0, 1.5, -1.0));
                assert_eq!(m.aabb().max, Vec3::new(11.0, 1.5, 1.0));
            }
            other => panic!("expected triangle mesh, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_mesh_scale_overrides_transform() {
        let mut physics = world();
        let transform = Transform::new().with_scale(Vec3::new(3.0, 3.0, 3.0));
        let mut collider = Collider::new();
        collider.add_triangle_mesh(
            &MeshData::quad(1.0),
            MeshImport::new().scaled(Vec3::new(5.0, 1.0, 5.0)),
            MaterialProperties::default(),
        );
        collider.enable(&transform, &mut physics, true, 0.0);

        match &collider.primitives()[0].0 {
            CollisionShape::TriangleMesh(m) => assert_eq!(m.aabb().max.x, 5.0),
            other => panic!("expected triangle mesh, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_mesh_skipped_not_fixed() {
        let mut physics = world();
        let degenerate = MeshData::new(vec![Vec3::ZERO, Vec3::ZERO, Vec3::ZERO], vec![[0, 1, 2]]);
        let mut collider = Collider::new();
        collider.add_triangle_mesh(&degenerate, MeshImport::new(), MaterialProperties::default());
        collider.add_primitive(
            CollisionShape::Plane(Plane::floor(0.0)),
            MaterialProperties::default(),
        );
        collider.enable(&Transform::new(), &mut physics, true, 0.0);

        // Bad mesh dropped, valid primitive still forms the body
        assert_eq!(collider.primitives().len(), 1);
        assert!(collider.is_enabled());
    }

    #[test]
    fn test_all_primitives_degenerate_registers_no_body() {
        let mut physics = world();
        let degenerate = MeshData::new(vec![Vec3::ZERO, Vec3::ZERO, Vec3::ZERO], vec![[0, 1, 2]]);
        let mut collider = Collider::new();
        collider.add_triangle_mesh(&degenerate, MeshImport::new(), MaterialProperties::default());
        collider.enable(&Transform::new(), &mut physics, true, 0.0);
        assert!(!collider.is_enabled());
        assert_eq!(physics.body_count(), 0);
    }

    #[test]
    fn test_disable_removes_body_keeps_primitives() {
        let mut physics = world();
        let mut collider = Collider::new();
        collider.add_primitive(
            CollisionShape::Plane(Plane::floor(0.0)),
            MaterialProperties::default(),
        );
        collider.enable(&Transform::new(), &mut physics, true, 0.0);
        let key = collider.body_key().unwrap();

        collider.disable(&mut physics);
        assert!(physics.get_body(key).is_none());
        assert_eq!(collider.primitives().len(), 1);
        assert!(!collider.is_enabled());
    }
}
