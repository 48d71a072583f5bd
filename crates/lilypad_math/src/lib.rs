//! Math types for the lilypad engine
//!
//! Provides the small set of linear-algebra types the engine core and
//! physics facade share:
//!
//! - [`Vec3`] - 3D vector
//! - [`Mat4`] - 4x4 column-major matrix for world/view transforms

mod vec3;
mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
