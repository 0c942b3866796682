//! Repo-level resolver configuration (.helix/pods.toml)
//!
//! Optional TOML layer underneath the process environment: a project can
//! pin the packaging mode, JS engine, or new-architecture override in the
//! repo, and the environment overrides it per invocation. An absent file
//! is an empty layer, not an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::resolver::JsEngine;

/// Default config location relative to the repo root.
pub const DEFAULT_CONFIG_PATH: &str = ".helix/pods.toml";

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repo configuration from .helix/pods.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodsConfig {
    /// Package pods as framework artifacts (overridden by `USE_FRAMEWORKS`)
    pub packaging: Option<bool>,

    /// JS engine: "spark" or "jsruntime" (overridden by `USE_SPARK`)
    #[serde(rename = "js_engine")]
    pub engine: Option<String>,

    /// New-architecture override (overridden by `HELIX_NEW_ARCH_ENABLED`)
    pub new_arch: Option<bool>,

    /// Path to the module manifest, relative to the repo root
    pub manifest: Option<PathBuf>,
}

impl PodsConfig {
    /// Load and parse config from a TOML file. A missing file yields the
    /// empty layer.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse config from a TOML string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: PodsConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(engine) = &self.engine {
            if engine != "spark" && engine != "jsruntime" {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid js_engine '{}': must be 'spark' or 'jsruntime'",
                    engine
                )));
            }
        }
        Ok(())
    }

    /// The configured engine, defaulting to Spark.
    pub fn js_engine(&self) -> JsEngine {
        match self.engine.as_deref() {
            Some("jsruntime") => JsEngine::JsRuntime,
            _ => JsEngine::Spark,
        }
    }
}
