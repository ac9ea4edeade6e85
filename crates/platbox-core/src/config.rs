use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::forces::{FRICTION, GRAVITY_SPEED};
use crate::world::{Obstacle, default_obstacles};

/// Logical canvas width.
pub const GAME_WIDTH: f64 = 1200.0;
/// Logical canvas height.
pub const GAME_HEIGHT: f64 = 800.0;
/// Player box width.
pub const CHAR_WIDTH: f64 = 50.0;
/// Player box height.
pub const CHAR_HEIGHT: f64 = 50.0;
/// Velocity change per tick while a direction key is held.
pub const INPUT_ACCELERATION: f64 = 1.0;
/// Tick driver period (60 Hz).
pub const CLOCK_SPEED_MS: f64 = 1000.0 / 60.0;

/// Force and input parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub friction: f64,
    pub input_acceleration: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_SPEED,
            friction: FRICTION,
            input_acceleration: INPUT_ACCELERATION,
        }
    }
}

/// Canvas and player dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub player_width: f64,
    pub player_height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            player_width: CHAR_WIDTH,
            player_height: CHAR_HEIGHT,
        }
    }
}

/// Top-level configuration, loadable from TOML.
///
/// A missing `obstacles` list gets the built-in layout for a 1200x800 canvas,
/// regardless of `world.width`/`world.height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatboxConfig {
    pub tick_interval_ms: f64,
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub obstacles: Vec<Obstacle>,
}

impl Default for PlatboxConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: CLOCK_SPEED_MS,
            world: WorldConfig::default(),
            physics: PhysicsConfig::default(),
            obstacles: default_obstacles(GAME_WIDTH, GAME_HEIGHT),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(m) => write!(f, "config parse error: {m}"),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl PlatboxConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PlatboxConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `$PLATBOX_CONFIG`, or `config/platbox.toml` when unset.
    pub fn load() -> Self {
        let path = std::env::var("PLATBOX_CONFIG")
            .unwrap_or_else(|_| "config/platbox.toml".to_string());
        Self::load_from(path)
    }

    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                    PlatboxConfig::default()
                },
            },
            Err(_) => PlatboxConfig::default(),
        }
    }

    /// Reject values that would put NaN/Infinity into the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        for (name, value) in [
            ("world.width", w.width),
            ("world.height", w.height),
            ("world.player_width", w.player_width),
            ("world.player_height", w.player_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if w.player_width > w.width || w.player_height > w.height {
            return Err(ConfigError::Invalid(
                "player does not fit inside the world".to_string(),
            ));
        }

        let p = &self.physics;
        for (name, value) in [
            ("physics.gravity", p.gravity),
            ("physics.friction", p.friction),
            ("physics.input_acceleration", p.input_acceleration),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }

        if !self.tick_interval_ms.is_finite() || self.tick_interval_ms <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_interval_ms must be positive, got {}",
                self.tick_interval_ms
            )));
        }

        for (i, o) in self.obstacles.iter().enumerate() {
            let finite = [o.x, o.y, o.width, o.height].iter().all(|v| v.is_finite());
            if !finite || o.width < 0.0 || o.height < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "obstacle {i} must have finite coordinates and non-negative size"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = PlatboxConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PlatboxConfig::default());
        assert_eq!(cfg.obstacles.len(), 6);
    }

    #[test]
    fn partial_physics_override() {
        let cfg = PlatboxConfig::from_toml_str(
            r#"
            [physics]
            gravity = 1.25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.physics.gravity, 1.25);
        assert_eq!(cfg.physics.friction, FRICTION);
        assert_eq!(cfg.world, WorldConfig::default());
    }

    #[test]
    fn obstacle_list_replaces_default_layout() {
        let cfg = PlatboxConfig::from_toml_str(
            r#"
            [[obstacles]]
            x = 10.0
            y = 20.0
            width = 30.0
            height = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.obstacles.len(), 1);
        assert_eq!(cfg.obstacles[0].right(), 40.0);
        assert_eq!(cfg.obstacles[0].bottom(), 60.0);
    }

    #[test]
    fn unknown_tables_are_ignored() {
        let cfg = PlatboxConfig::from_toml_str(
            r#"
            [render]
            canvas_id = "other"
            "#,
        )
        .unwrap();
        assert_eq!(cfg, PlatboxConfig::default());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = PlatboxConfig::from_toml_str("[physics\ngravity = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_world_is_rejected() {
        let err = PlatboxConfig::from_toml_str("[world]\nwidth = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("world.width"));
    }

    #[test]
    fn oversized_player_is_rejected() {
        let err = PlatboxConfig::from_toml_str("[world]\nplayer_width = 5000.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn infinite_gravity_is_rejected() {
        let err = PlatboxConfig::from_toml_str("[physics]\ngravity = inf").unwrap_err();
        assert!(err.to_string().contains("physics.gravity"));
    }

    #[test]
    fn negative_obstacle_size_is_rejected() {
        let mut cfg = PlatboxConfig::default();
        cfg.obstacles[2].width = -1.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("obstacle 2"));
    }

    #[test]
    fn default_tick_interval_is_sixty_hz() {
        let cfg = PlatboxConfig::default();
        assert!((cfg.tick_interval_ms - 16.666_666).abs() < 1e-3);
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let cfg = PlatboxConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let parsed = PlatboxConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    fn scratch_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("platbox-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("platbox-does-not-exist/platbox.toml");
        assert_eq!(PlatboxConfig::load_from(&path), PlatboxConfig::default());
    }

    #[test]
    fn load_from_reads_overrides() {
        let path = scratch_file(
            "overrides",
            "tick_interval_ms = 20.0\n[physics]\ngravity = 0.75\n",
        );
        let cfg = PlatboxConfig::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.tick_interval_ms, 20.0);
        assert_eq!(cfg.physics.gravity, 0.75);
        assert_eq!(cfg.obstacles.len(), 6);
    }

    #[test]
    fn load_from_invalid_file_falls_back_to_defaults() {
        let path = scratch_file("invalid", "[world]\nwidth = -5.0\n");
        let cfg = PlatboxConfig::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg, PlatboxConfig::default());
    }
}
