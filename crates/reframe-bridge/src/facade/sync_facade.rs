//! Blocking facade

use super::FacadeCore;
use crate::decode::AnalysisResult;
use crate::error::BridgeError;
use crate::operation::AnalysisOperation;
use crate::request::AnalysisRequest;

/// Calls the engine synchronously and decodes its report.
///
/// The caller's thread is blocked for the duration of the engine call.
///
/// ```rust,ignore
/// let facade = SyncAnalysisFacade::new(engine);
/// let report = facade.analyze(("src/app.tsx", source))?;
/// ```
#[derive(Debug, Clone)]
pub struct SyncAnalysisFacade<O> {
    operation: O,
    core: FacadeCore,
}

impl<O: AnalysisOperation> SyncAnalysisFacade<O> {
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
    pub fn analyze(
        &self,
        request: impl Into<AnalysisRequest>,
    ) -> Result<AnalysisResult, BridgeError<O::Error>> {
        let args = self.core.prepare(request.into(), "sync");
        let outcome = self.operation.analyze_sync(&args);
        self.core.settle(&args, outcome)
    }
}
