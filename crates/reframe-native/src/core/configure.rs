//! Applying `ReframeConfig` to the binding.

use std::path::Path;

use reframe_bridge::{ConfigError, ReframeConfig};

use crate::registry;

/// Load config rooted at `root` and apply the minify capability.
///
/// Logging is left to the caller, since only the first subscriber install
/// in a process takes effect.
pub fn apply_config(root: &Path) -> Result<ReframeConfig, ConfigError> {
    let config = ReframeConfig::load(root)?;
    registry::set_minify_support(config.supports_minify);
    tracing::debug!(
        root = %root.display(),
        supports_minify = config.supports_minify,
        "applied reframe config"
    );
    Ok(config)
}
