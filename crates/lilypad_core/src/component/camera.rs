//! Camera component

use lilypad_math::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective camera parameters
///
/// The owning transform supplies position and orientation; this
/// component only carries projection state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_deg: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new(fov_y_deg: f32, near: f32, far: f32) -> Self {
        Self { fov_y_deg, near, far }
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fov_y_deg, aspect, self.near, self.far)
    }
}
