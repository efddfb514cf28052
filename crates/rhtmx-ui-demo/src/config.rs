// File: src/config.rs
// Purpose: Demo configuration parsing from rhtmx-ui.toml

use anyhow::{Context, Result};
use rhtmx_ui::ToastConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "RHTMX_UI_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "rhtmx-ui.toml";

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Toast container used on every page
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub select: SelectDefaults,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Defaults applied to every select on the demo page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectDefaults {
    #[serde(default = "default_true")]
    pub searchable: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SelectDefaults {
    fn default() -> Self {
        Self { searchable: true }
    }
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: DemoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `$RHTMX_UI_CONFIG`, or ./rhtmx-ui.toml
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
