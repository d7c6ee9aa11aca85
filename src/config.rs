use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FigsumError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub walker: WalkerConfig,
    pub classifier: ClassifierConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Value of a node's `type` field that marks it as text-bearing.
    pub text_node_type: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            text_node_type: "TEXT".to_string(),
        }
    }
}

/// Font-size and shape thresholds used to assign a [`crate::Role`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub heading_min_size: f64,
    pub subhead_min_size: f64,
    pub cta_max_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            heading_min_size: 40.0,
            subhead_min_size: 24.0,
            cta_max_chars: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// How many trailing ancestor names to show per line.
    pub parent_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { parent_depth: 3 }
    }
}

impl Config {
    /// Load config from an explicit path, the central config file, or defaults.
    ///
    /// An explicit path must exist; the central file is only read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let location = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::central_config_path().filter(|p| p.is_file()),
        };

        let Some(location) = location else {
            log::debug!("No config file found; using built-in defaults");
            return Ok(Self::default());
        };

        let raw =
            std::fs::read_to_string(&location).map_err(|e| FigsumError::read(&location, e))?;
        let cfg = Self::from_toml_str(&raw).map_err(|source| FigsumError::ConfigParse {
            path: location.clone(),
            source,
        })?;
        log::info!("Loaded config from {}", location.display());
        Ok(cfg)
    }

    pub fn from_toml_str(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// `$XDG_CONFIG_HOME/figsum/config.toml`, falling back to `~/.config/figsum/config.toml`.
    pub fn central_config_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME")
                    .filter(|v| !v.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })?;
        Some(base.join("figsum").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.walker.text_node_type.trim().is_empty() {
            return Err(FigsumError::config("walker.text_node_type must not be empty"));
        }

        let c = &self.classifier;
        if !c.heading_min_size.is_finite() || !c.subhead_min_size.is_finite() {
            return Err(FigsumError::config(
                "classifier font-size thresholds must be finite numbers",
            ));
        }
        if c.subhead_min_size < 0.0 {
            return Err(FigsumError::config(format!(
                "classifier.subhead_min_size must be >= 0 (got {})",
                c.subhead_min_size
            )));
        }
        if c.heading_min_size < c.subhead_min_size {
            return Err(FigsumError::config(format!(
                "classifier.heading_min_size ({}) must be >= subhead_min_size ({})",
                c.heading_min_size, c.subhead_min_size
            )));
        }

        if self.render.parent_depth == 0 {
            return Err(FigsumError::config("render.parent_depth must be at least 1"));
        }

        Ok(())
    }
}
