//! Bridge configuration.
//!
//! Values are layered with figment, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `reframe.toml` in the project root
//! 3. `REFRAME_*` environment variables (e.g. `REFRAME_SUPPORTS_MINIFY=false`)

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conventional config file name.
pub const CONFIG_FILE: &str = "reframe.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "REFRAME_";

const LOG_LEVELS: &[&str] = &["silent", "off", "error", "warn", "warning", "info", "debug"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("invalid config value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Extract(Box::new(error))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReframeConfig {
    /// Whether facades forward `minify` to the engine.
    pub supports_minify: bool,

    /// Log level for `init_logging` ("silent", "error", "warn", "info", "debug").
    pub log_level: Option<String>,
}

impl Default for ReframeConfig {
    fn default() -> Self {
        Self {
            supports_minify: true,
            log_level: None,
        }
    }
}

impl ReframeConfig {
    /// Load configuration rooted at `root`.
    ///
    /// A missing `reframe.toml` is not an error; defaults and environment
    /// variables still apply.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(root))
    }

    /// The layered figment used by [`ReframeConfig::load`].
    pub fn figment(root: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(ReframeConfig::default()))
            .merge(Toml::file(config_path(root.as_ref())))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extract and validate configuration from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: ReframeConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "log_level".to_string(),
                    hint: format!(
                        "unknown level '{}', expected one of silent, error, warn, info, debug",
                        level
                    ),
                });
            }
        }
        Ok(())
    }
}

fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
