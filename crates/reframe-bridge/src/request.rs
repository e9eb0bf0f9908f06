//! Request types and parameter defaulting.

use serde::{Deserialize, Serialize};

/// Target environment used when the caller does not name one.
pub const DEFAULT_ENV: &str = "server";

/// Minification setting used when the caller does not choose one and the
/// facade forwards minify at all.
pub const DEFAULT_MINIFY: bool = true;

/// A single analysis request as the caller expresses it.
///
/// `path` and `content` are required. `env` and `minify` are optional and
/// resolved against fixed defaults by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub path: String,
    pub content: String,
    #[serde(default)]
    pub env: Option<String>,
    #[serde(default)]
    pub minify: Option<bool>,
}

impl AnalysisRequest {
    /// Create a request for `path` with the given source `content`.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            env: None,
            minify: None,
        }
    }

    /// Set the target environment (defaults to `"server"`).
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Set minification (defaults to `true` where supported).
    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = Some(minify);
        self
    }

    /// Resolve defaults into the argument set forwarded to the engine.
    ///
    /// When `supports_minify` is false the minify flag is dropped entirely,
    /// even if the caller set one, and the engine sees the 3-argument form.
    pub fn resolve(self, supports_minify: bool) -> OperationArgs {
        let minify = if supports_minify {
            Some(self.minify.unwrap_or(DEFAULT_MINIFY))
        } else {
            if self.minify.is_some() {
                tracing::debug!(
                    path = %self.path,
                    "minify not supported by this facade, dropping caller value"
                );
            }
            None
        };

        OperationArgs {
            path: self.path,
            content: self.content,
            env: self.env.unwrap_or_else(|| DEFAULT_ENV.to_string()),
            minify,
        }
    }
}

impl<P, C> From<(P, C)> for AnalysisRequest
where
    P: Into<String>,
    C: Into<String>,
{
    fn from((path, content): (P, C)) -> Self {
        Self::new(path, content)
    }
}

/// Fully-resolved arguments handed to an [`AnalysisOperation`].
///
/// `minify == None` is the 3-argument form: the engine applies its own
/// default.
///
/// [`AnalysisOperation`]: crate::AnalysisOperation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationArgs {
    pub path: String,
    pub content: String,
    pub env: String,
    pub minify: Option<bool>,
}
