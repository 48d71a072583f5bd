//! Narrowphase collision checks
//!
//! Dynamic bodies are capsules or cuboids; static geometry is planes,
//! cuboids and triangle meshes. Capsules are tested as the sphere pair
//! at their segment endpoints, which is accurate enough for platformer
//! bodies that stay upright.

use lilypad_math::Vec3;
use crate::shapes::{Aabb, Capsule, CollisionShape, Cuboid, Plane, TriangleMesh};

/// A single contact point between two shapes
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// World-space contact point
    pub point: Vec3,
    /// Unit normal pointing out of the static surface, toward the body
    pub normal: Vec3,
    /// Penetration depth along the normal (positive = overlapping)
    pub penetration: f32,
}

impl Contact {
    pub fn new(point: Vec3, normal: Vec3, penetration: f32) -> Self {
        Self { point, normal, penetration }
    }

    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Sphere against an infinite plane
pub fn sphere_vs_plane(center: Vec3, radius: f32, plane: &Plane) -> Option<Contact> {
    let dist = plane.signed_distance(center);
    if dist < radius {
        let point = center - plane.normal * dist;
        Some(Contact::new(point, plane.normal, radius - dist))
    } else {
        None
    }
}

/// Sphere against an axis-aligned box
pub fn sphere_vs_aabb(center: Vec3, radius: f32, aabb: &Aabb) -> Option<Contact> {
    let closest = aabb.closest_point(center);
    let delta = center - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }
    if dist_sq > 1.0e-8 {
        let dist = dist_sq.sqrt();
        Some(Contact::new(closest, delta * (1.0 / dist), radius - dist))
    } else {
        // Center inside the box: push out along the shallowest face
        let he = aabb.half_extents();
        let local = center - aabb.center();
        let dx = he.x - local.x.abs();
        let dy = he.y - local.y.abs();
        let dz = he.z - local.z.abs();
        let (normal, depth) = if dx <= dy && dx <= dz {
            (Vec3::X * local.x.signum(), dx)
        } else if dy <= dz {
            (Vec3::Y * local.y.signum(), dy)
        } else {
            (Vec3::Z * local.z.signum(), dz)
        };
        Some(Contact::new(center, normal, depth + radius))
    }
}

/// Closest point on a triangle to a point
fn closest_point_on_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    // Standard barycentric region test (Ericson, Real-Time Collision Detection)
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Sphere against a static triangle mesh (deepest contact wins)
pub fn sphere_vs_trimesh(center: Vec3, radius: f32, mesh: &TriangleMesh) -> Option<Contact> {
    let sphere_bounds = Aabb::from_center_half_extents(center, Vec3::splat(radius));
    if !sphere_bounds.overlaps(&mesh.aabb()) {
        return None;
    }

    let verts = mesh.vertices();
    let mut best: Option<Contact> = None;
    for tri in mesh.indices() {
        let (a, b, c) = (
            verts[tri[0] as usize],
            verts[tri[1] as usize],
            verts[tri[2] as usize],
        );
        let closest = closest_point_on_triangle(center, a, b, c);
        let delta = center - closest;
        let dist_sq = delta.length_squared();
        if dist_sq < radius * radius && dist_sq > 1.0e-8 {
            let dist = dist_sq.sqrt();
            let contact = Contact::new(closest, delta * (1.0 / dist), radius - dist);
            if best.map_or(true, |b| contact.penetration > b.penetration) {
                best = Some(contact);
            }
        }
    }
    best
}

/// Capsule against static shapes, tested as its endpoint sphere pair
pub fn capsule_vs_shape(capsule: &Capsule, shape: &CollisionShape) -> Option<Contact> {
    let spheres = [capsule.bottom(), capsule.top()];
    let mut best: Option<Contact> = None;
    for center in spheres {
        let contact = match shape {
            CollisionShape::Plane(p) => sphere_vs_plane(center, capsule.radius, p),
            CollisionShape::Cuboid(c) => sphere_vs_aabb(center, capsule.radius, &c.aabb()),
            CollisionShape::TriangleMesh(m) => sphere_vs_trimesh(center, capsule.radius, m),
            // Capsule-vs-capsule bodies never collide here; dynamic
            // pairs are not resolved by this facade.
            CollisionShape::Capsule(_) => None,
        };
        if let Some(c) = contact {
            if best.map_or(true, |b| c.penetration > b.penetration) {
                best = Some(c);
            }
        }
    }
    best
}

/// Cuboid against static shapes
pub fn cuboid_vs_shape(cuboid: &Cuboid, shape: &CollisionShape) -> Option<Contact> {
    match shape {
        CollisionShape::Plane(p) => {
            // Support distance of the box along the plane normal
            let he = cuboid.half_extents;
            let reach =
                he.x * p.normal.x.abs() + he.y * p.normal.y.abs() + he.z * p.normal.z.abs();
            let dist = p.signed_distance(cuboid.center);
            if dist < reach {
                let point = cuboid.center - p.normal * dist;
                Some(Contact::new(point, p.normal, reach - dist))
            } else {
                None
            }
        }
        CollisionShape::Cuboid(other) => {
            let a = cuboid.aabb();
            let b = other.aabb();
            if !a.overlaps(&b) {
                return None;
            }
            // Minimum translation along an axis
            let delta = a.center() - b.center();
            let overlap = a.half_extents() + b.half_extents()
                - Vec3::new(delta.x.abs(), delta.y.abs(), delta.z.abs());
            let (normal, depth) = if overlap.x <= overlap.y && overlap.x <= overlap.z {
                (Vec3::X * delta.x.signum(), overlap.x)
            } else if overlap.y <= overlap.z {
                (Vec3::Y * delta.y.signum(), overlap.y)
            } else {
                (Vec3::Z * delta.z.signum(), overlap.z)
            };
            Some(Contact::new(b.closest_point(a.center()), normal, depth))
        }
        CollisionShape::TriangleMesh(m) => {
            // Coarse: treat the cuboid as its inscribed sphere
            let r = cuboid
                .half_extents
                .x
                .min(cuboid.half_extents.y)
                .min(cuboid.half_extents.z);
            sphere_vs_trimesh(cuboid.center, r, m)
        }
        CollisionShape::Capsule(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_vs_plane_hit() {
        let plane = Plane::floor(0.0);
        let contact = sphere_vs_plane(Vec3::new(0.0, 0.3, 0.0), 0.5, &plane).unwrap();
        assert!(contact.is_colliding());
        assert!((contact.penetration - 0.2).abs() < 0.0001);
        assert_eq!(contact.normal, Vec3::Y);
    }

    #[test]
    fn test_sphere_vs_plane_miss() {
        let plane = Plane::floor(0.0);
        assert!(sphere_vs_plane(Vec3::new(0.0, 2.0, 0.0), 0.5, &plane).is_none());
    }

    #[test]
    fn test_sphere_vs_aabb_side_hit() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let contact = sphere_vs_aabb(Vec3::new(1.3, 0.0, 0.0), 0.5, &aabb).unwrap();
        assert_eq!(contact.normal, Vec3::X);
        assert!((contact.penetration - 0.2).abs() < 0.0001);
    }

    #[test]
    fn test_sphere_inside_aabb_pushes_out_shallowest_face() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(1.0, 5.0, 5.0));
        let contact = sphere_vs_aabb(Vec3::new(0.9, 0.0, 0.0), 0.5, &aabb).unwrap();
        assert_eq!(contact.normal, Vec3::X);
    }

    #[test]
    fn test_capsule_vs_floor_uses_bottom_sphere() {
        let plane = CollisionShape::Plane(Plane::floor(0.0));
        let capsule = Capsule::new(Vec3::new(0.0, 1.2, 0.0), 0.5, 1.0);
        // Bottom sphere center at y=0.2, radius 0.5 -> penetration 0.3
        let contact = capsule_vs_shape(&capsule, &plane).unwrap();
        assert!((contact.penetration - 0.3).abs() < 0.0001);
    }

    #[test]
    fn test_cuboid_vs_plane_support() {
        let plane = CollisionShape::Plane(Plane::floor(0.0));
        let cuboid = Cuboid::new(Vec3::new(0.0, 0.8, 0.0), Vec3::ONE);
        let contact = cuboid_vs_shape(&cuboid, &plane).unwrap();
        assert!((contact.penetration - 0.2).abs() < 0.0001);
        assert_eq!(contact.normal, Vec3::Y);
    }

    #[test]
    fn test_sphere_vs_trimesh_landing() {
        let mesh = TriangleMesh::new(
            vec![
                Vec3::new(-2.0, 1.0, -2.0),
                Vec3::new(2.0, 1.0, -2.0),
                Vec3::new(2.0, 1.0, 2.0),
                Vec3::new(-2.0, 1.0, 2.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .unwrap();
        let contact = sphere_vs_trimesh(Vec3::new(0.0, 1.3, 0.0), 0.5, &mesh).unwrap();
        assert!((contact.penetration - 0.2).abs() < 0.0001);
        assert!((contact.normal - Vec3::Y).length() < 0.0001);
    }

    #[test]
    fn test_closest_point_on_triangle_interior() {
        let p = closest_point_on_triangle(
            Vec3::new(0.25, 5.0, 0.25),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert!((p - Vec3::new(0.25, 0.0, 0.25)).length() < 0.0001);
    }

    #[test]
    fn test_closest_point_on_triangle_vertex() {
        let p = closest_point_on_triangle(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(p, Vec3::ZERO);
    }
}
