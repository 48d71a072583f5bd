//! 4x4 matrix for 3D affine transforms
//!
//! Column-major, so `a * b` applies `b` first, then `a`. Rotation
//! constructors take degrees because the engine's Transform stores
//! Euler angles in degrees.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::{to_radians, Vec3};

/// 4x4 column-major matrix
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    /// Columns of the matrix
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a translation matrix
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    /// Create a non-uniform scale matrix
    pub fn from_scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = s.x;
        m.cols[1][1] = s.y;
        m.cols[2][2] = s.z;
        m
    }

    /// Rotation about the X axis (degrees)
    pub fn from_rotation_x(degrees: f32) -> Self {
        let (sn, cs) = to_radians(degrees).sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[1][1] = cs;
        m.cols[1][2] = sn;
        m.cols[2][1] = -sn;
        m.cols[2][2] = cs;
        m
    }

    /// Rotation about the Y axis (degrees)
    pub fn from_rotation_y(degrees: f32) -> Self {
        let (sn, cs) = to_radians(degrees).sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0][0] = cs;
        m.cols[0][2] = -sn;
        m.cols[2][0] = sn;
        m.cols[2][2] = cs;
        m
    }

    /// Rotation about the Z axis (degrees)
    pub fn from_rotation_z(degrees: f32) -> Self {
        let (sn, cs) = to_radians(degrees).sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0][0] = cs;
        m.cols[0][1] = sn;
        m.cols[1][0] = -sn;
        m.cols[1][1] = cs;
        m
    }

    /// Rotation from Euler angles in degrees, applied X, then Y, then Z
    ///
    /// The axis order is fixed; movement controllers and the Transform
    /// basis vectors depend on it.
    pub fn from_euler_deg(e: Vec3) -> Self {
        Self::from_rotation_z(e.z) * Self::from_rotation_y(e.y) * Self::from_rotation_x(e.x)
    }

    /// Right-handed perspective projection mapping depth to [0, 1]
    pub fn perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (to_radians(fov_y_deg) * 0.5).tan();
        let mut m = Self { cols: [[0.0; 4]; 4] };
        m.cols[0][0] = f / aspect;
        m.cols[1][1] = f;
        m.cols[2][2] = far / (near - far);
        m.cols[2][3] = -1.0;
        m.cols[3][2] = near * far / (near - far);
        m
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0] * p.z + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1] * p.z + c[3][1],
            c[0][2] * p.x + c[1][2] * p.y + c[2][2] * p.z + c[3][2],
        )
    }

    /// Transform a direction (ignores translation)
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * d.x + c[1][0] * d.y + c[2][0] * d.z,
            c[0][1] * d.x + c[1][1] * d.y + c[2][1] * d.z,
            c[0][2] * d.x + c[1][2] * d.y + c[2][2] * d.z,
        )
    }

    /// First basis column (local +X in world space)
    pub fn x_axis(&self) -> Vec3 {
        Vec3::new(self.cols[0][0], self.cols[0][1], self.cols[0][2])
    }

    /// Second basis column (local +Y in world space)
    pub fn y_axis(&self) -> Vec3 {
        Vec3::new(self.cols[1][0], self.cols[1][1], self.cols[1][2])
    }

    /// Third basis column (local +Z in world space)
    pub fn z_axis(&self) -> Vec3 {
        Vec3::new(self.cols[2][0], self.cols[2][1], self.cols[2][2])
    }

    /// Translation column
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += self.cols[k][j] * other.cols[i][k];
                }
            }
        }
        Self { cols: result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(Mat4::IDENTITY.transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = m.transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
        // Directions ignore translation
        assert!(vec_approx_eq(m.transform_direction(Vec3::X), Vec3::X));
    }

    #[test]
    fn test_scale() {
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        let p = m.transform_point(Vec3::ONE);
        assert!(vec_approx_eq(p, Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_rotation_y() {
        // +90 degrees about Y sends +Z to +X
        let m = Mat4::from_rotation_y(90.0);
        let p = m.transform_point(Vec3::Z);
        assert!(vec_approx_eq(p, Vec3::X), "got {:?}", p);
    }

    #[test]
    fn test_rotation_x() {
        // +90 degrees about X sends +Y to +Z
        let m = Mat4::from_rotation_x(90.0);
        let p = m.transform_point(Vec3::Y);
        assert!(vec_approx_eq(p, Vec3::Z), "got {:?}", p);
    }

    #[test]
    fn test_rotation_z() {
        // +90 degrees about Z sends +X to +Y
        let m = Mat4::from_rotation_z(90.0);
        let p = m.transform_point(Vec3::X);
        assert!(vec_approx_eq(p, Vec3::Y), "got {:?}", p);
    }

    #[test]
    fn test_euler_order_x_then_y_then_z() {
        // Rotate +Y by 90 about X (-> +Z), then by 90 about Y (-> +X)
        let m = Mat4::from_euler_deg(Vec3::new(90.0, 90.0, 0.0));
        let p = m.transform_point(Vec3::Y);
        assert!(vec_approx_eq(p, Vec3::X), "got {:?}", p);
    }

    #[test]
    fn test_mul_applies_rhs_first() {
        let t = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let r = Mat4::from_rotation_y(90.0);
        // t * r: rotate first, then translate
        let p = (t * r).transform_point(Vec3::Z);
        assert!(vec_approx_eq(p, Vec3::new(11.0, 0.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_basis_columns() {
        let m = Mat4::from_rotation_y(90.0);
        assert!(vec_approx_eq(m.z_axis(), Vec3::X));
        assert!(vec_approx_eq(m.y_axis(), Vec3::Y));
    }
}
