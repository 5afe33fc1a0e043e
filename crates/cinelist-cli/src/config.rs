/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed client configuration
[POS]:    Configuration layer - backend addressing and session
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinelist_client::ClientConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Backend addressing, flattened into the top level of the file
    #[serde(flatten)]
    pub client: ClientConfig,
    /// Session cookie (`name=value`) attached to movie requests
    #[serde(default)]
    pub session_cookie: Option<String>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is valid and means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

/// `<config dir>/cinelist/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cinelist").join("config.yaml"))
}
