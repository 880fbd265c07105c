//! Application configuration loading

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::server::router::DEFAULT_LISTING_PATH;

/// Application configuration.
///
/// Every field has a default so a missing or partial YAML file still
/// yields a runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Path of the invoice listing page; routes and redirects follow it.
    #[serde(default = "default_listing_path")]
    pub listing_path: String,

    /// PostgreSQL connection string (only used with the `postgres`
    /// feature; the in-memory store needs none).
    #[serde(default)]
    pub database_url: Option<String>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_listing_path() -> String {
    DEFAULT_LISTING_PATH.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            listing_path: default_listing_path(),
            database_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
