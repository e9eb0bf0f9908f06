//! Standalone NAPI functions

use crate::core::{analyze_blocking, analyze_nonblocking, apply_config};
use crate::error_mapper::to_napi_error;
use crate::types::parse_log_level;
use napi::bindgen_prelude::*;
use napi_derive::napi;
use reframe_bridge::AnalysisRequest;

/// Configuration applied by `configure()`.
#[napi(object)]
pub struct AppliedConfig {
    /// Whether `minify` is forwarded to the engine
    pub supports_minify: bool,
    /// Log level requested by the config, if any
    pub log_level: Option<String>,
}

fn request(
    path: String,
    content: String,
    env: Option<String>,
    minify: Option<bool>,
) -> AnalysisRequest {
    AnalysisRequest {
        path,
        content,
        env,
        minify,
    }
}

/// Analyze a source file and return the engine's report.
///
/// Blocks the JS thread until the engine finishes.
///
/// ```typescript
/// const report = analyze("app/page.tsx", source);          // env "server", minify true
/// const client = analyze("app/page.tsx", source, "client", false);
/// ```
#[napi]
pub fn analyze(
    path: String,
    content: String,
    env: Option<String>,
    minify: Option<bool>,
) -> Result<serde_json::Value> {
    analyze_blocking(request(path, content, env, minify)).map_err(|e| to_napi_error(&e))
}

/// Analyze a source file without blocking the JS thread.
///
/// ```typescript
/// const report = await analyzeAsync("app/page.tsx", source, "client");
/// ```
#[napi]
pub async fn analyze_async(
    path: String,
    content: String,
    env: Option<String>,
    minify: Option<bool>,
) -> Result<serde_json::Value> {
    analyze_nonblocking(request(path, content, env, minify))
        .await
        .map_err(|e| to_napi_error(&e))
}

/// Load `reframe.toml` / `REFRAME_*` settings and apply them.
///
/// `root` defaults to the process working directory. Logging is initialized
/// only when the config sets `log_level`.
#[napi]
pub fn configure(root: Option<String>) -> Result<AppliedConfig> {
    let root = match root {
        Some(root) => std::path::PathBuf::from(root),
        None => std::env::current_dir()
            .map_err(|e| Error::from_reason(format!("Failed to determine working directory: {}", e)))?,
    };

    let config = apply_config(&root).map_err(|e| Error::from_reason(e.to_string()))?;
    // Unset log_level leaves the subscriber to initLogging/initLoggingFromEnv
    reframe_bridge::init_logging_from_config(&config);

    Ok(AppliedConfig {
        supports_minify: config.supports_minify,
        log_level: config.log_level,
    })
}

/// Initialize logging with the specified level.
///
/// Call once at startup; later calls have no effect.
#[napi]
pub fn init_logging(level: Option<String>) {
    reframe_bridge::init_logging(parse_log_level(level.as_deref()));
}

/// Initialize logging from the RUST_LOG environment variable.
#[napi]
pub fn init_logging_from_env() {
    reframe_bridge::init_logging_from_env();
}

/// Get the bridge version
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
