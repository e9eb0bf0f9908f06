//! Non-blocking facade

use super::FacadeCore;
use crate::decode::AnalysisResult;
use crate::error::BridgeError;
use crate::operation::AnalysisOperation;
use crate::request::AnalysisRequest;

/// Calls the engine through its non-blocking path and decodes the report
/// once the pending computation settles.
///
/// The returned future suspends exactly once, on the engine. There is no
/// timeout or cancellation hook here; dropping the future is the only way
/// to stop waiting, and the engine's work is not aborted by it.
///
/// ```rust,ignore
/// let facade = AsyncAnalysisFacade::new(engine);
/// let report = facade
///     .analyze(AnalysisRequest::new("src/app.tsx", source).env("client"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct AsyncAnalysisFacade<O> {
    operation: O,
    core: FacadeCore,
}

impl<O: AnalysisOperation> AsyncAnalysisFacade<O> {
    /// Create a facade that forwards minify (default `true`).
    pub fn new(operation: O) -> Self {
        Self {
            operation,
            core: FacadeCore::default(),
        }
    }

    /// Choose whether minify is forwarded to the engine at all.
    pub fn with_minify_support(mut self, supported: bool) -> Self {
        self.core.supports_minify = supported;
        self
    }

    pub fn supports_minify(&self) -> bool {
        self.core.supports_minify
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }

    /// Analyze one source file.
    pub async fn analyze(
        &self,
        request: impl Into<AnalysisRequest>,
    ) -> Result<AnalysisResult, BridgeError<O::Error>> {
        let args = self.core.prepare(request.into(), "async");
        let outcome = self.operation.analyze_async(&args).await;
        self.core.settle(&args, outcome)
    }
}
