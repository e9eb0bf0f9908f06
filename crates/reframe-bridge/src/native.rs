//! In-process engine adapter.
//!
//! `NativeEngine` turns a Rust [`SourceAnalyzer`] into an
//! [`AnalysisOperation`]: the path is normalized into a module specifier,
//! the analyzer runs, and its report is serialized to JSON text. The
//! non-blocking path runs the analyzer on tokio's blocking pool so the
//! awaiting executor stays free for other tasks.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::operation::AnalysisOperation;
use crate::request::OperationArgs;

/// Turn a file path into the module specifier the engine expects.
///
/// Anything that already carries a scheme (`file://`, `https://`, ...) is
/// left alone; absolute paths become `file://` URLs and relative paths are
/// rooted at `file:///`.
pub fn normalize_specifier(path: &str) -> Cow<'_, str> {
    if path.contains("://") {
        Cow::Borrowed(path)
    } else if path.starts_with('/') {
        Cow::Owned(format!("file://{path}"))
    } else {
        Cow::Owned(format!("file:///{path}"))
    }
}

/// Input handed to a [`SourceAnalyzer`].
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerInput<'a> {
    /// Normalized module specifier (see [`normalize_specifier`]).
    pub specifier: &'a str,
    pub content: &'a str,
    pub env: &'a str,
    /// `None` when the facade does not forward minify.
    pub minify: Option<bool>,
}

/// A synchronous, in-process analysis engine.
pub trait SourceAnalyzer: Send + Sync + 'static {
    type Report: Serialize;
    type Error: std::error::Error + Send + Sync + 'static;

    fn analyze(&self, input: AnalyzerInput<'_>) -> Result<Self::Report, Self::Error>;
}

/// Errors reported by [`NativeEngine`].
#[derive(Debug, Error)]
pub enum NativeEngineError<E> {
    /// The analyzer rejected the source.
    #[error("analysis failed")]
    Analysis(#[source] E),

    /// The analyzer's report could not be serialized.
    #[error("failed to encode analysis report: {0}")]
    Encode(#[from] serde_json::Error),

    /// The blocking task running the analyzer panicked or was cancelled.
    #[error("analysis task failed: {0}")]
    TaskFailed(String),
}

/// [`AnalysisOperation`] backed by an in-process [`SourceAnalyzer`].
#[derive(Debug)]
pub struct NativeEngine<A> {
    analyzer: Arc<A>,
}

impl<A> Clone for NativeEngine<A> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

impl<A: SourceAnalyzer> NativeEngine<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    pub fn from_arc(analyzer: Arc<A>) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }
}

fn run_analyzer<A: SourceAnalyzer>(
    analyzer: &A,
    args: &OperationArgs,
) -> Result<String, NativeEngineError<A::Error>> {
    let specifier = normalize_specifier(&args.path);
    let report = analyzer
        .analyze(AnalyzerInput {
            specifier: specifier.as_ref(),
            content: &args.content,
            env: &args.env,
            minify: args.minify,
        })
        .map_err(NativeEngineError::Analysis)?;
    Ok(serde_json::to_string(&report)?)
}

#[async_trait]
impl<A: SourceAnalyzer> AnalysisOperation for NativeEngine<A> {
    type Error = NativeEngineError<A::Error>;

    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        run_analyzer(self.analyzer.as_ref(), args)
    }

    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        let analyzer = Arc::clone(&self.analyzer);
        let args = args.clone();
        tokio::task::spawn_blocking(move || run_analyzer(analyzer.as_ref(), &args))
            .await
            .map_err(|e| NativeEngineError::TaskFailed(e.to_string()))?
    }
}
