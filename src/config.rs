//! Application configuration
//!
//! Layered sources, later wins: built-in defaults, then
//! `config/default.toml`, then an optional `config/user.toml`, then
//! `LILY_`-prefixed environment variables with `__` as the section
//! separator (`LILY_PHYSICS__GRAVITY=9.8`).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use lilypad_physics::PhysicsConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Load(figment::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "failed to load configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(e) => Some(e),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "lilypad".to_string(),
        }
    }
}

/// First-person controller tuning
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub look_speed: f32,
    pub vertical_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            look_speed: 0.1,
            vertical_speed: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log object positions once a second
    pub log_positions: bool,
    pub show_colliders: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub debug: DebugConfig,
}

impl AppConfig {
    /// The layered figment, defaults lowest
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/user.toml"))
            .merge(Env::prefixed("LILY_").split("__"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert!(config.physics.gravity > 0.0);
        assert!(config.player.move_speed > 0.0);
        assert!(!config.debug.log_positions);
    }
}
