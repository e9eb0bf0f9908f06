//! Core analyze calls (no NAPI dependencies)

use reframe_bridge::{AnalysisRequest, AsyncAnalysisFacade, BridgeError, SyncAnalysisFacade};
use serde_json::Value;
use thiserror::Error;

use crate::registry;

/// Failure of a binding-level analyze call.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("no analysis engine installed")]
    NoEngine,

    #[error(transparent)]
    Bridge(#[from] BridgeError<anyhow::Error>),
}

/// Blocking analysis against the installed engine.
pub fn analyze_blocking(request: AnalysisRequest) -> Result<Value, CallError> {
    let (operation, supports_minify) = registry::current().ok_or(CallError::NoEngine)?;
    let result = SyncAnalysisFacade::new(operation)
        .with_minify_support(supports_minify)
        .analyze(request)?;
    Ok(result.into_value())
}

/// Non-blocking analysis against the installed engine.
pub async fn analyze_nonblocking(request: AnalysisRequest) -> Result<Value, CallError> {
    let (operation, supports_minify) = registry::current().ok_or(CallError::NoEngine)?;
    let result = AsyncAnalysisFacade::new(operation)
        .with_minify_support(supports_minify)
        .analyze(request)
        .await?;
    Ok(result.into_value())
}
