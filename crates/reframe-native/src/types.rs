//! Type conversions for reframe-native
//!
//! Enum-like options are exposed as strings for JS/TS ergonomics and parsed
//! case-insensitively.

use reframe_bridge::LogLevel;

/// Convert a log level string to the bridge LogLevel (case-insensitive)
pub fn parse_log_level(level: Option<&str>) -> LogLevel {
    level
        .and_then(|s| s.parse::<LogLevel>().ok())
        .unwrap_or_default()
}
