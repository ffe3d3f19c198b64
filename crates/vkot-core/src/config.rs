use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level layer configuration, loaded from vkot.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default)]
    pub object_tracker: TrackerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Register the lifetime tracker in the interceptor chain
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// What happens to objects still alive when their scope is destroyed
    #[serde(default)]
    pub teardown: TeardownPolicy,
    /// A veto from any interceptor prevents the call from being forwarded
    #[serde(default = "default_true")]
    pub skip_on_violation: bool,
    /// Search sibling scopes for missing handles so they can be reported
    /// against their wrong-parent identifier
    #[serde(default = "default_true")]
    pub report_wrong_parent: bool,
}

/// Scope teardown behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeardownPolicy {
    /// Report every surviving object, then drop it
    #[default]
    #[serde(rename = "report")]
    Report,
    /// Drop surviving objects without reporting them
    #[serde(rename = "destroy")]
    Destroy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when VKOT_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            teardown: TeardownPolicy::default(),
            skip_on_violation: true,
            report_wrong_parent: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl LayerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from `VKOT_CONFIG`, falling back to [`default_config_path`].
    pub fn from_env() -> Self {
        let path = std::env::var("VKOT_CONFIG").unwrap_or_else(|_| default_config_path());
        Self::load_or_default(&path)
    }
}

/// Returns the default config file path based on platform conventions.
/// Search order:
/// 1. System-wide config: `%PROGRAMDATA%\vkot\vkot.toml` (Windows) or `/etc/vkot/vkot.toml`
/// 2. Local fallback: `./vkot.toml`
pub fn default_config_path() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        let system_path = format!(r"{}\vkot\vkot.toml", programdata);
        if std::path::Path::new(&system_path).exists() {
            return system_path;
        }
    }
    #[cfg(not(windows))]
    {
        let system_path = "/etc/vkot/vkot.toml";
        if std::path::Path::new(system_path).exists() {
            return system_path.to_string();
        }
    }
    "vkot.toml".to_string()
}

fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "info".to_string()
}
