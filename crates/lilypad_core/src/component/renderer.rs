//! Mesh rendering component and the backend seam
//!
//! The core never draws; it walks enabled renderers and hands
//! mesh + material + world matrix to a [`RenderBackend`] trait object.
//! Draw submission is fire-and-forget.

use lilypad_math::Mat4;
use serde::{Deserialize, Serialize};

use crate::assets::{MeshData, ShaderHandle, TextureHandle};

/// Surface appearance consumed opaquely by the renderer collaborator
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderMaterial {
    pub shader: Option<ShaderHandle>,
    pub base_color: [f32; 4],
    pub opacity: f32,
    pub texture: Option<TextureHandle>,
}

impl Default for RenderMaterial {
    fn default() -> Self {
        Self {
            shader: None,
            base_color: [1.0, 1.0, 1.0, 1.0],
            opacity: 1.0,
            texture: None,
        }
    }
}

impl RenderMaterial {
    pub fn colored(r: f32, g: f32, b: f32) -> Self {
        Self {
            base_color: [r, g, b, 1.0],
            ..Self::default()
        }
    }

    pub fn textured(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            ..Self::default()
        }
    }
}

/// Renders one mesh with one material
///
/// Owns its mesh data by value so archetype clones carry independent
/// copies.
#[derive(Clone, Debug)]
pub struct MeshRenderer {
    pub mesh: MeshData,
    pub material: RenderMaterial,
}

impl MeshRenderer {
    pub fn new(mesh: MeshData, material: RenderMaterial) -> Self {
        Self { mesh, material }
    }
}

/// Draw-submission seam to the renderer collaborator
pub trait RenderBackend {
    fn draw_mesh(&mut self, mesh: &MeshData, material: &RenderMaterial, world: &Mat4);
}
