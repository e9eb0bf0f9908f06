//! Sync and async analysis facades.
//!
//! Both facades share the same preparation (defaulting, minify capability)
//! and settlement (decoding) steps; they differ only in how the engine is
//! invoked.

mod async_facade;
mod sync_facade;

pub use async_facade::AsyncAnalysisFacade;
pub use sync_facade::SyncAnalysisFacade;

use crate::decode::{decode_result, AnalysisResult};
use crate::error::BridgeError;
use crate::request::{AnalysisRequest, OperationArgs};

/// Steps shared by both facades.
#[derive(Debug, Clone, Copy)]
struct FacadeCore {
    supports_minify: bool,
}

impl Default for FacadeCore {
    fn default() -> Self {
        Self {
            supports_minify: true,
        }
    }
}

impl FacadeCore {
    fn prepare(&self, request: AnalysisRequest, mode: &'static str) -> OperationArgs {
        let args = request.resolve(self.supports_minify);
        tracing::debug!(
            mode,
            path = %args.path,
            env = %args.env,
            minify = ?args.minify,
            content_len = args.content.len(),
            "dispatching analysis"
        );
        args
    }

    fn settle<E>(
        &self,
        args: &OperationArgs,
        outcome: Result<String, E>,
    ) -> Result<AnalysisResult, BridgeError<E>> {
        let payload = outcome.map_err(|e| {
            tracing::debug!(path = %args.path, "analysis engine failed");
            BridgeError::External(e)
        })?;

        decode_result(&payload).map_err(|e| {
            tracing::warn!(path = %args.path, error = %e, "discarding malformed analysis result");
            BridgeError::MalformedResult(e)
        })
    }
}
