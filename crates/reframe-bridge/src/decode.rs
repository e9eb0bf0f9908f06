//! Decoding of the engine's JSON payload.
//!
//! The engine's report schema is its own business; this step only checks
//! that the text is valid JSON and hands back the decoded tree.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MalformedResult;

/// Decoded analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Give up the wrapper and take ownership of the decoded tree.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Deref for AnalysisResult {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for AnalysisResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<AnalysisResult> for Value {
    fn from(result: AnalysisResult) -> Self {
        result.0
    }
}

impl PartialEq<Value> for AnalysisResult {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}

/// Decode the engine's JSON text.
pub fn decode_result(payload: &str) -> Result<AnalysisResult, MalformedResult> {
    serde_json::from_str::<Value>(payload)
        .map(AnalysisResult)
        .map_err(|e| MalformedResult::new(payload, e))
}
