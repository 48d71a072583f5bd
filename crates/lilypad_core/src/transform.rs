//! Local position, rotation and scale for a game object
//!
//! Rotation is stored as Euler angles in degrees and applied in fixed
//! X, then Y, then Z order. Level code leans on partial updates: a
//! `None` axis in a setter keeps the previous value, so a clone can
//! override two scale axes while preserving the archetype's third.

use lilypad_math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in degrees, applied X then Y then Z
    pub rotation: Vec3,
    /// Permissive: zero and negative components are accepted as-is
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, t: Vec3) -> Self {
        self.translation = t;
        self
    }

    pub fn with_rotation(mut self, r: Vec3) -> Self {
        self.rotation = r;
        self
    }

    pub fn with_scale(mut self, s: Vec3) -> Self {
        self.scale = s;
        self
    }

    /// Add to the local translation
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.translation += Vec3::new(dx, dy, dz);
    }

    /// Add to the local rotation, in degrees
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation += Vec3::new(dx, dy, dz);
    }

    /// Absolute set; `None` leaves that axis untouched
    pub fn set_translation(&mut self, x: Option<f32>, y: Option<f32>, z: Option<f32>) {
        if let Some(x) = x {
            self.translation.x = x;
        }
        if let Some(y) = y {
            self.translation.y = y;
        }
        if let Some(z) = z {
            self.translation.z = z;
        }
    }

    /// Absolute set in degrees; `None` leaves that axis untouched
    pub fn set_rotation(&mut self, x: Option<f32>, y: Option<f32>, z: Option<f32>) {
        if let Some(x) = x {
            self.rotation.x = x;
        }
        if let Some(y) = y {
            self.rotation.y = y;
        }
        if let Some(z) = z {
            self.rotation.z = z;
        }
    }

    /// Absolute set; `None` leaves that axis untouched
    pub fn set_scale(&mut self, x: Option<f32>, y: Option<f32>, z: Option<f32>) {
        if let Some(x) = x {
            self.scale.x = x;
        }
        if let Some(y) = y {
            self.scale.y = y;
        }
        if let Some(z) = z {
            self.scale.z = z;
        }
    }

    /// World matrix: scale, then rotation, then translation
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_euler_deg(self.rotation)
            * Mat4::from_scale(self.scale)
    }

    fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_euler_deg(self.rotation)
    }

    /// Unit vector the object faces (-Z rotated by the current rotation)
    pub fn forward(&self) -> Vec3 {
        self.rotation_matrix().transform_direction(-Vec3::Z)
    }

    pub fn up(&self) -> Vec3 {
        self.rotation_matrix().transform_direction(Vec3::Y)
    }

    pub fn right(&self) -> Vec3 {
        self.rotation_matrix().transform_direction(Vec3::X)
    }

    pub fn left(&self) -> Vec3 {
        -self.right()
    }
}
