//! Error types for the analysis facades.

use thiserror::Error;

/// Result alias for facade calls; `E` is the engine's own error type.
pub type Result<T, E> = std::result::Result<T, BridgeError<E>>;

/// Longest slice of a rejected payload kept for diagnostics.
const PREVIEW_CHARS: usize = 120;

/// Errors surfaced by [`SyncAnalysisFacade`] and [`AsyncAnalysisFacade`].
///
/// [`SyncAnalysisFacade`]: crate::SyncAnalysisFacade
/// [`AsyncAnalysisFacade`]: crate::AsyncAnalysisFacade
#[derive(Debug, Error)]
pub enum BridgeError<E> {
    /// The engine failed or rejected. The cause is passed through untouched.
    #[error("analysis engine failed: {0}")]
    External(E),

    /// The engine returned text that is not valid JSON.
    #[error(transparent)]
    MalformedResult(#[from] MalformedResult),
}

impl<E> BridgeError<E> {
    /// The engine's original error, if this is an engine failure.
    pub fn external(&self) -> Option<&E> {
        match self {
            BridgeError::External(e) => Some(e),
            BridgeError::MalformedResult(_) => None,
        }
    }

    /// Take back the engine's original error.
    pub fn into_external(self) -> Option<E> {
        match self {
            BridgeError::External(e) => Some(e),
            BridgeError::MalformedResult(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, BridgeError::MalformedResult(_))
    }
}

/// The engine's payload could not be parsed as JSON.
#[derive(Debug, Error)]
#[error("analysis result is not parseable JSON (line {line}, column {column}): {source}; payload starts with {preview:?}")]
pub struct MalformedResult {
    line: usize,
    column: usize,
    preview: String,
    #[source]
    source: serde_json::Error,
}

impl MalformedResult {
    pub(crate) fn new(payload: &str, source: serde_json::Error) -> Self {
        Self {
            line: source.line(),
            column: source.column(),
            preview: payload.chars().take(PREVIEW_CHARS).collect(),
            source,
        }
    }

    /// Start of the rejected payload, truncated for logging.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}
