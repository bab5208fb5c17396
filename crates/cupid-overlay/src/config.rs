//! Overlay configuration loaded from TOML
//!
//! Every table is optional; omitted fields fall back to the built-in
//! defaults, so an empty file (or no file at all) yields the stock
//! overlay.

use cupid_particles::{BurstConfig, FieldConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] cupid_particles::ConfigError),
}

/// Host window settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Transparent windows let the hearts float over whatever is behind
    /// them; compositors without alpha support fall back to black.
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "cupid".to_string(),
            width: 1280,
            height: 720,
            transparent: true,
        }
    }
}

/// Top-level overlay configuration: `[window]`, `[field]`, `[burst]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub burst: BurstConfig,
}

impl OverlayConfig {
    /// Load a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OverlayConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a config from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, OverlayConfigError> {
        let config: OverlayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), cupid_particles::ConfigError> {
        self.field.validate()?;
        self.burst.validate()?;
        Ok(())
    }
}
