use serde::{Deserialize, Serialize};

use platbox_core::{ConfigError, PlatboxConfig};

/// Default configuration baked into the WASM bundle.
const EMBEDDED_CONFIG: &str = include_str!("../../../config/platbox.toml");

/// Canvas element and fill colors, from the `[render]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub canvas_id: String,
    pub background: String,
    pub obstacle: String,
    pub player: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            background: "white".to_string(),
            obstacle: "black".to_string(),
            player: "red".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RenderSection {
    render: RenderSettings,
}

/// Simulation config plus client-only render settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    pub game: PlatboxConfig,
    pub render: RenderSettings,
}

impl ClientConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let game = PlatboxConfig::from_toml_str(content)?;
        let section: RenderSection =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self {
            game,
            render: section.render,
        })
    }

    /// The config compiled into the bundle, or defaults if it does not parse.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(cfg) => cfg,
            Err(e) => {
                crate::diag::console_warn!("Embedded config rejected: {e}, using defaults");
                Self::default()
            },
        }
    }
}
