//! The engine boundary.
//!
//! `AnalysisOperation` is the only way the facades reach the analysis
//! engine. Adapters implement it for whatever engine is available: an
//! in-process analyzer ([`NativeEngine`]), a foreign library, a test double.
//!
//! [`NativeEngine`]: crate::NativeEngine

use std::sync::Arc;

use async_trait::async_trait;

use crate::request::OperationArgs;

/// Analysis engine operation.
///
/// Both methods return the engine's report as JSON text. `args.minify` is
/// `None` when the caller's facade does not forward minify; the engine then
/// applies its own default.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use reframe_bridge::{AnalysisOperation, OperationArgs};
///
/// struct Canned;
///
/// #[async_trait]
/// impl AnalysisOperation for Canned {
///     type Error = std::io::Error;
///
///     fn analyze_sync(&self, _args: &OperationArgs) -> Result<String, Self::Error> {
///         Ok(r#"{"framework":"none"}"#.to_string())
///     }
///
///     async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
///         self.analyze_sync(args)
///     }
/// }
/// ```
#[async_trait]
pub trait AnalysisOperation: Send + Sync {
    /// Engine failure type, surfaced to callers unchanged.
    type Error: Send;

    /// Run the analysis to completion on the calling thread.
    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error>;

    /// Run the analysis without blocking the executor driving the caller.
    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error>;
}

#[async_trait]
impl<O> AnalysisOperation for Arc<O>
where
    O: AnalysisOperation + ?Sized,
{
    type Error = O::Error;

    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        (**self).analyze_sync(args)
    }

    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        (**self).analyze_async(args).await
    }
}

#[async_trait]
impl<O> AnalysisOperation for Box<O>
where
    O: AnalysisOperation + ?Sized,
{
    type Error = O::Error;

    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        (**self).analyze_sync(args)
    }

    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        (**self).analyze_async(args).await
    }
}
