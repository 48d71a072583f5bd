//! Scene manager: named scenes and the active-scene lifecycle

use std::collections::HashMap;

use crate::assets::AssetError;
use crate::input::InputState;
use crate::scene::{Scene, SceneState};

#[derive(Debug)]
pub enum SceneError {
    /// No scene registered under this name
    NotFound(String),
    /// Loading requires at least one object added first
    EmptyScene(String),
    /// An unloaded scene cannot be loaded again
    AlreadyUnloaded(String),
    /// A content lookup failed during level construction
    Construction(AssetError),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::NotFound(name) => write!(f, "no scene named '{}'", name),
            SceneError::EmptyScene(name) => {
                write!(f, "scene '{}' has no objects; populate it before loading", name)
            }
            SceneError::AlreadyUnloaded(name) => {
                write!(f, "scene '{}' was unloaded and cannot be reloaded", name)
            }
            SceneError::Construction(e) => write!(f, "level construction failed: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Construction(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AssetError> for SceneError {
    fn from(e: AssetError) -> Self {
        SceneError::Construction(e)
    }
}

/// Owns every scene and tracks which one is live
#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<String, Scene>,
    active: Option<String>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scene(&mut self, name: impl Into<String>, scene: Scene) {
        self.scenes.insert(name.into(), scene);
    }

    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(name)
    }

    /// Make a scene active, unloading the previously active one
    ///
    /// The target scene must be Populated; its main camera is resolved
    /// as part of loading.
    pub fn load_scene(&mut self, name: &str) -> Result<(), SceneError> {
        let state = self
            .scenes
            .get(name)
            .ok_or_else(|| SceneError::NotFound(name.to_string()))?
            .state();
        if state == SceneState::Empty {
            return Err(SceneError::EmptyScene(name.to_string()));
        }
        if state == SceneState::Unloaded {
            return Err(SceneError::AlreadyUnloaded(name.to_string()));
        }

        if let Some(previous) = self.active.take() {
            if previous != name {
                if let Some(scene) = self.scenes.get_mut(&previous) {
                    scene.unload();
                }
            }
        }

        let scene = self
            .scenes
            .get_mut(name)
            .ok_or_else(|| SceneError::NotFound(name.to_string()))?;
        scene.mark_loaded(name)?;
        self.active = Some(name.to_string());
        Ok(())
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.active.as_ref().and_then(|n| self.scenes.get(n))
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        self.active.as_deref().and_then(|n| self.scenes.get_mut(n))
    }

    /// Tick the active scene; a manager with nothing loaded is a no-op
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if let Some(scene) = self.active_scene_mut() {
            scene.update(dt, input);
        }
    }
}
