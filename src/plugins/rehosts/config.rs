//! Rehosts plugin configuration
//!
//! Declarative configuration for the plugin, deserializable from YAML.

use super::table::RehostsOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Rehosts plugin configuration
///
/// # Example
///
/// ```
/// use rehosts::plugins::rehosts::RehostsConfig;
///
/// let config: RehostsConfig = serde_yaml::from_str(
///     "path: /etc/rehosts\nttl: 600\nreload_secs: 10\n",
/// ).unwrap();
/// assert_eq!(config.ttl, 600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehostsConfig {
    /// Path to the rehosts file
    pub path: PathBuf,

    /// TTL of synthesized DNS records in seconds, 1..=65535
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Reload check period in seconds; 0 disables periodic reload
    #[serde(default = "default_reload_secs")]
    pub reload_secs: u64,

    /// Authoritative origin zones; queries outside them pass through
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,

    /// Fallthrough zones: absent disables fallthrough, an empty list
    /// enables it for all zones, a non-empty list for the listed zones
    #[serde(default, rename = "fallthrough")]
    pub fall_through: Option<Vec<String>>,
}

fn default_ttl() -> u32 {
    3600
}

fn default_reload_secs() -> u64 {
    5
}

fn default_origins() -> Vec<String> {
    vec![".".to_string()]
}

impl RehostsConfig {
    /// Create a configuration for a file path with default values
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: default_ttl(),
            reload_secs: default_reload_secs(),
            origins: default_origins(),
            fall_through: None,
        }
    }

    /// Get the reload check period as a Duration
    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.reload_secs)
    }

    /// Resolve into table options
    pub fn options(&self) -> RehostsOptions {
        RehostsOptions {
            ttl: self.ttl,
            reload: self.reload_interval(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, the ttl is outside
    /// 1..=65535 or no origin zone is configured.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::Config("rehosts file path cannot be empty".to_string()));
        }

        if self.ttl == 0 || self.ttl > 65535 {
            return Err(Error::invalid_config_value(
                "ttl",
                self.ttl.to_string(),
                "must be between 1 and 65535",
            ));
        }

        if self.origins.is_empty() {
            return Err(Error::Config("origins cannot be empty".to_string()));
        }

        Ok(())
    }
}
