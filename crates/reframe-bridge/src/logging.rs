//! Logging utilities for reframe-bridge
//!
//! This module is only available with the `logging` feature.
//!
//! The facades only emit tracing events. Hosts that embed the bridge
//! without their own subscriber can use these helpers to install one.

use std::sync::Once;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ReframeConfig;

static INIT: Once = Once::new();

/// Verbosity of the subscriber installed by [`init_logging`].
///
/// Accepted names match the `log_level` config key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    /// Includes malformed engine payloads
    Warn,
    #[default]
    Info,
    /// Includes per-call dispatch and settlement
    Debug,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Silent => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_ascii_lowercase().as_str() {
            "silent" | "off" => LogLevel::Silent,
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => return Err(format!("unknown reframe log level '{s}'")),
        };
        Ok(level)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.level_filter(), f)
    }
}

fn install(filter: EnvFilter) {
    // try_init: the host may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).without_time())
        .try_init();
}

/// Initialize bridge logging with the specified level.
///
/// Only the first call in a process takes effect. `RUST_LOG` directives are
/// still honored on top of the default level.
///
/// ```rust,no_run
/// use reframe_bridge::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.level_filter().into())
            .from_env_lossy();
        install(filter);
    });
}

/// Initialize logging at the level named by `config`, if it names one.
///
/// Returns `false` without touching the subscriber when `log_level` is unset
/// or unrecognized, so a later [`init_logging`] call still takes effect.
pub fn init_logging_from_config(config: &ReframeConfig) -> bool {
    match config.log_level.as_deref().map(str::parse::<LogLevel>) {
        Some(Ok(level)) => {
            init_logging(level);
            true
        }
        _ => false,
    }
}

/// Initialize logging from the `RUST_LOG` environment variable.
///
/// Falls back to Info level if `RUST_LOG` is not set or invalid.
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Silent);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("chatty".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Silent.to_string(), "off");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_config_without_level_leaves_logging_alone() {
        assert!(!init_logging_from_config(&ReframeConfig::default()));

        let unknown = ReframeConfig {
            log_level: Some("chatty".to_string()),
            ..ReframeConfig::default()
        };
        assert!(!init_logging_from_config(&unknown));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(LogLevel::Silent);
        init_logging(LogLevel::Debug);
        init_logging_from_env();
    }
}
