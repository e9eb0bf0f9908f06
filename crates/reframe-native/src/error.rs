//! Structured error details handed to JavaScript.
//!
//! The TypeScript side sees a discriminated union on `type`.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type")]
pub enum ReframeErrorDetails {
    /// The analysis engine failed; `causes` is the engine's error chain.
    External { message: String, causes: Vec<String> },

    /// The engine returned text that is not valid JSON.
    MalformedResult {
        message: String,
        line: usize,
        column: usize,
        preview: String,
    },

    /// `analyze` was called before the host installed an engine.
    NoEngine { message: String },
}

impl ReframeErrorDetails {
    pub fn to_napi_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            "{\"type\":\"External\",\"message\":\"Failed to serialize error\",\"causes\":[]}"
                .to_string()
        })
    }
}
