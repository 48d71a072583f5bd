//! String-keyed content tables populated during level construction
//!
//! Lookups fail loudly: a missing key is an [`AssetError`], never a
//! silently substituted placeholder. The asset pipeline itself is an
//! external collaborator; meshes arrive as plain vertex/index arrays
//! and textures/fonts as opaque handles.

use std::collections::HashMap;

use lilypad_math::Vec3;
use serde::{Deserialize, Serialize};

/// Plain triangle-mesh data shared by rendering and collider derivation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// Axis-aligned unit cube centered at the origin
    pub fn unit_cube() -> Self {
        let h = 0.5;
        let vertices = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        let indices = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];
        Self { vertices, indices }
    }

    /// Flat quad in the XZ plane with the given half-size
    pub fn quad(half_size: f32) -> Self {
        let h = half_size;
        Self {
            vertices: vec![
                Vec3::new(-h, 0.0, -h),
                Vec3::new(h, 0.0, -h),
                Vec3::new(h, 0.0, h),
                Vec3::new(-h, 0.0, h),
            ],
            indices: vec![[0, 2, 1], [0, 3, 2]],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderHandle(pub u32);

/// A content lookup failed
#[derive(Debug, PartialEq, Eq)]
pub enum AssetError {
    NotFound {
        kind: &'static str,
        key: String,
    },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::NotFound { kind, key } => {
                write!(f, "no {} registered under key '{}'", kind, key)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Holds every asset loaded for a level, keyed by name
#[derive(Debug, Default)]
pub struct ContentStore {
    meshes: HashMap<String, MeshData>,
    textures: HashMap<String, TextureHandle>,
    fonts: HashMap<String, FontHandle>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_mesh(&mut self, key: impl Into<String>, mesh: MeshData) {
        self.meshes.insert(key.into(), mesh);
    }

    pub fn insert_texture(&mut self, key: impl Into<String>, texture: TextureHandle) {
        self.textures.insert(key.into(), texture);
    }

    pub fn insert_font(&mut self, key: impl Into<String>, font: FontHandle) {
        self.fonts.insert(key.into(), font);
    }

    pub fn mesh(&self, key: &str) -> Result<&MeshData, AssetError> {
        self.meshes.get(key).ok_or(AssetError::NotFound {
            kind: "mesh",
            key: key.to_string(),
        })
    }

    pub fn texture(&self, key: &str) -> Result<TextureHandle, AssetError> {
        self.textures.get(key).copied().ok_or(AssetError::NotFound {
            kind: "texture",
            key: key.to_string(),
        })
    }

    pub fn font(&self, key: &str) -> Result<FontHandle, AssetError> {
        self.fonts.get(key).copied().ok_or(AssetError::NotFound {
            kind: "font",
            key: key.to_string(),
        })
    }
}
