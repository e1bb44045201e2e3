//! Configuration loading: embedded TOML document with build-time overrides.
//!
//! `maintrack.toml` is compiled into the bundle. Every field has a default so
//! the document may be empty. `MAINTRACK_*` variables present when the crate
//! is built take precedence over file values.

use serde::Deserialize;

const EMBEDDED: &str = include_str!("../maintrack.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend settings.
    pub api: ApiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// REST backend settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is appended to, without trailing slash.
    pub base_url: String,
    /// Path of the equipment list used by the maintenance form.
    pub equipment_lookup_path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Values that replace file settings when present.
#[derive(Debug, Default)]
struct Overrides {
    base_url: Option<&'static str>,
    equipment_lookup_path: Option<&'static str>,
    log: Option<&'static str>,
}

impl Overrides {
    fn from_build_env() -> Self {
        Self {
            base_url: option_env!("MAINTRACK_API_BASE_URL"),
            equipment_lookup_path: option_env!("MAINTRACK_EQUIPMENT_LOOKUP_PATH"),
            log: option_env!("MAINTRACK_LOG"),
        }
    }
}

impl Config {
    /// Parse the embedded document, then apply build-time overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML is malformed or the resulting
    /// configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(EMBEDDED)?;
        config.apply_overrides(&Overrides::from_build_env());
        config.validate()?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(val) = overrides.base_url {
            self.api.base_url = val.to_string();
        }
        if let Some(val) = overrides.equipment_lookup_path {
            self.api.equipment_lookup_path = val.to_string();
        }
        if let Some(val) = overrides.log {
            self.logging.filter = val.to_string();
        }
    }

    fn validate(&mut self) -> Result<(), ConfigError> {
        let trimmed = self.api.base_url.trim_end_matches('/').len();
        self.api.base_url.truncate(trimmed);
        if self.api.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if !self.api.equipment_lookup_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "api.equipment_lookup_path must start with '/'".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            equipment_lookup_path: "/equipaments".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
