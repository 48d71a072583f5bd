//! Collision primitives
//!
//! Shapes are registered in world coordinates: the collider layer
//! bakes each primitive's placement before handing it to the physics
//! world, and the world translates shapes along with their body during
//! integration.

use lilypad_math::{Mat4, Vec3};

/// Error building a collision shape from mesh data
#[derive(Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// No vertices or no triangles
    Empty,
    /// A vertex contained NaN or infinity
    NonFinite,
    /// A triangle index referenced a missing vertex
    IndexOutOfBounds(u32),
    /// Total surface area is zero (all triangles collapsed)
    Degenerate,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "mesh has no geometry"),
            ShapeError::NonFinite => write!(f, "mesh contains non-finite vertex data"),
            ShapeError::IndexOutOfBounds(i) => write!(f, "triangle index {} out of bounds", i),
            ShapeError::Degenerate => write!(f, "mesh has zero surface area"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the size in each dimension
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Closest point inside or on the box to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp_components(self.min, self.max)
    }

    /// Whether two boxes overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Translate by a delta
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// Infinite plane: `normal . point = distance`
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    /// Unit normal pointing to the positive side
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal (normalized automatically) and distance
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalized(),
            distance,
        }
    }

    /// Horizontal ground plane at the given height
    pub fn floor(y: f32) -> Self {
        Self {
            normal: Vec3::Y,
            distance: y,
        }
    }

    /// Signed distance from a point (positive = normal side)
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Axis-aligned box primitive
#[derive(Clone, Copy, Debug)]
pub struct Cuboid {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Cuboid {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self { center, half_extents }
    }

    /// World-space bounds
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}

/// Vertical capsule: a segment along +Y with a radius
///
/// `center` is the midpoint of the segment; the segment endpoints sit
/// at `center.y +/- half_height`. This is the player-body primitive.
#[derive(Clone, Copy, Debug)]
pub struct Capsule {
    pub center: Vec3,
    pub radius: f32,
    pub half_height: f32,
}

impl Capsule {
    pub fn new(center: Vec3, radius: f32, half_height: f32) -> Self {
        Self { center, radius, half_height }
    }

    /// Lower segment endpoint
    pub fn bottom(&self) -> Vec3 {
        self.center - Vec3::Y * self.half_height
    }

    /// Upper segment endpoint
    pub fn top(&self) -> Vec3 {
        self.center + Vec3::Y * self.half_height
    }

    pub fn aabb(&self) -> Aabb {
        let r = Vec3::new(self.radius, self.radius + self.half_height, self.radius);
        Aabb::from_center_half_extents(self.center, r)
    }
}

/// Static triangle mesh baked into world coordinates
///
/// Built once from render-mesh data with a placement transform applied
/// at import; never moves after registration.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    bounds: Aabb,
}

impl TriangleMesh {
    /// Build a triangle mesh from already-placed vertices
    ///
    /// Rejects empty, non-finite, out-of-bounds and zero-area
    /// geometry; the caller is expected to surface the error rather
    /// than patch the mesh.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Result<Self, ShapeError> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(ShapeError::Empty);
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        let count = vertices.len() as u32;
        let mut area = 0.0f32;
        for tri in &indices {
            for &i in tri {
                if i >= count {
                    return Err(ShapeError::IndexOutOfBounds(i));
                }
            }
            let [a, b, c] = [
                vertices[tri[0] as usize],
                vertices[tri[1] as usize],
                vertices[tri[2] as usize],
            ];
            area += (b - a).cross(c - a).length() * 0.5;
        }
        if area <= f32::EPSILON {
            return Err(ShapeError::Degenerate);
        }

        let mut min = vertices[0];
        let mut max = vertices[0];
        for v in &vertices[1..] {
            min = min.min_components(*v);
            max = max.max_components(*v);
        }

        Ok(Self {
            vertices,
            indices,
            bounds: Aabb::new(min, max),
        })
    }

    /// Build a triangle mesh from local-space mesh data plus a
    /// placement (translation, Euler rotation in degrees, scale)
    ///
    /// The transform is baked into the vertices at import time, so the
    /// resulting shape is world-space and independent of any render
    /// transform.
    pub fn with_placement(
        vertices: &[Vec3],
        indices: &[[u32; 3]],
        translation: Vec3,
        rotation_deg: Vec3,
        scale: Vec3,
    ) -> Result<Self, ShapeError> {
        let m = Mat4::from_translation(translation)
            * Mat4::from_euler_deg(rotation_deg)
            * Mat4::from_scale(scale);
        let placed = vertices.iter().map(|v| m.transform_point(*v)).collect();
        Self::new(placed, indices.to_vec())
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    pub fn aabb(&self) -> Aabb {
        self.bounds
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

/// A collision primitive in world coordinates
#[derive(Clone, Debug)]
pub enum CollisionShape {
    Plane(Plane),
    Cuboid(Cuboid),
    Capsule(Capsule),
    TriangleMesh(TriangleMesh),
}

impl CollisionShape {
    /// World-space bounds; planes are unbounded and return a huge box
    pub fn aabb(&self) -> Aabb {
        const HUGE: f32 = 1.0e9;
        match self {
            CollisionShape::Plane(_) => {
                Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(HUGE))
            }
            CollisionShape::Cuboid(c) => c.aabb(),
            CollisionShape::Capsule(c) => c.aabb(),
            CollisionShape::TriangleMesh(m) => m.aabb(),
        }
    }

    /// Translate the shape by a delta
    ///
    /// Triangle meshes are static by contract; translating one moves
    /// only its cached bounds reference point via full vertex shift.
    pub fn translated(&self, delta: Vec3) -> Self {
        match self {
            CollisionShape::Plane(p) => CollisionShape::Plane(Plane {
                normal: p.normal,
                distance: p.distance + p.normal.dot(delta),
            }),
            CollisionShape::Cuboid(c) => {
                CollisionShape::Cuboid(Cuboid::new(c.center + delta, c.half_extents))
            }
            CollisionShape::Capsule(c) => {
                CollisionShape::Capsule(Capsule::new(c.center + delta, c.radius, c.half_height))
            }
            CollisionShape::TriangleMesh(m) => {
                let mut moved = m.clone();
                for v in &mut moved.vertices {
                    *v += delta;
                }
                moved.bounds = moved.bounds.translated(delta);
                CollisionShape::TriangleMesh(moved)
            }
        }
    }
}
