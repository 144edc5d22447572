//! Configuration schema for Anvil
//!
//! Configuration is stored at `~/.config/anvil/config.toml`

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::form::{ProjectType, TechStack};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Forge endpoint settings
    pub server: ServerConfig,

    /// Group lookup settings
    pub groups: GroupsConfig,

    /// Project form defaults
    pub project: ProjectConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Forge endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the forge API
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://forge.example.com".to_string(),
        }
    }
}

/// Group lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    /// Maximum groups fetched for the baseline common list
    pub common_limit: usize,

    /// Maximum groups returned per search
    pub search_limit: usize,

    /// Quiet period before a typed term triggers a search
    pub debounce_ms: u64,
}

impl GroupsConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            common_limit: 200,
            search_limit: 20,
            debounce_ms: 300,
        }
    }
}

/// Project form defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Pre-selected project type
    pub default_type: Option<ProjectType>,

    /// Pre-selected technology stack
    pub default_stack: Option<TechStack>,
}
