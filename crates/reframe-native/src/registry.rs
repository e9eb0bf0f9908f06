//! Process-wide engine slot.
//!
//! The addon does not own an engine. The embedding host installs one (and
//! may replace it); every call reads the slot once and works on its own
//! `Arc` clone, so a replacement never affects a call already in flight.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use reframe_bridge::{AnalysisOperation, OperationArgs};

/// Type-erased engine shared with the bindings.
pub type SharedOperation = Arc<dyn AnalysisOperation<Error = anyhow::Error>>;

struct Slot {
    operation: Option<SharedOperation>,
    supports_minify: bool,
}

static SLOT: Lazy<RwLock<Slot>> = Lazy::new(|| {
    RwLock::new(Slot {
        operation: None,
        supports_minify: true,
    })
});

/// Wraps an engine so its error type becomes `anyhow::Error`.
struct Erased<O>(O);

#[async_trait]
impl<O> AnalysisOperation for Erased<O>
where
    O: AnalysisOperation,
    O::Error: std::error::Error + Send + Sync + 'static,
{
    type Error = anyhow::Error;

    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        self.0.analyze_sync(args).map_err(anyhow::Error::new)
    }

    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        self.0.analyze_async(args).await.map_err(anyhow::Error::new)
    }
}

/// Install the analysis engine used by `analyze` / `analyzeAsync`.
///
/// Replaces any previously installed engine.
pub fn install_engine<O>(operation: O)
where
    O: AnalysisOperation + 'static,
    O::Error: std::error::Error + Send + Sync + 'static,
{
    install_shared(Arc::new(Erased(operation)));
}

/// Install an engine that already reports `anyhow::Error`.
pub fn install_shared(operation: SharedOperation) {
    SLOT.write().operation = Some(operation);
    tracing::debug!("analysis engine installed");
}

/// Remove the installed engine. Returns whether one was installed.
pub fn uninstall_engine() -> bool {
    SLOT.write().operation.take().is_some()
}

/// Choose whether calls forward `minify` to the engine.
pub fn set_minify_support(supported: bool) {
    SLOT.write().supports_minify = supported;
}

pub fn minify_supported() -> bool {
    SLOT.read().supports_minify
}

/// Snapshot of the installed engine and minify capability.
pub(crate) fn current() -> Option<(SharedOperation, bool)> {
    let slot = SLOT.read();
    slot.operation
        .as_ref()
        .map(|op| (Arc::clone(op), slot.supports_minify))
}
