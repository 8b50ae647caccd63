//! Application configuration, optionally loaded from a RON file.

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::confetti::{ConfettiConfig, ConfettiConfigError};

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid window size {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("Invalid confetti config: {0}")]
    Confetti(#[from] ConfettiConfigError),
}

/// Main window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "AVA by Camila Escudero".to_string(),
            width: 700.0,
            height: 450.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub confetti: ConfettiConfig,
}

impl AppConfig {
    /// Parse a RON document; missing fields keep their defaults
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&source)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.window.width, self.window.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        self.confetti.validate()?;
        Ok(())
    }
}
