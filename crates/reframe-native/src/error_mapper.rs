use crate::core::CallError;
use crate::error::ReframeErrorDetails;
use reframe_bridge::BridgeError;

/// Map a binding call failure to structured details.
pub fn map_call_error(error: &CallError) -> ReframeErrorDetails {
    match error {
        CallError::NoEngine => ReframeErrorDetails::NoEngine {
            message: error.to_string(),
        },
        CallError::Bridge(BridgeError::External(cause)) => ReframeErrorDetails::External {
            // The engine's own message, not the bridge's wrapper text
            message: cause.to_string(),
            causes: cause.chain().skip(1).map(|c| c.to_string()).collect(),
        },
        CallError::Bridge(BridgeError::MalformedResult(malformed)) => {
            ReframeErrorDetails::MalformedResult {
                message: malformed.to_string(),
                line: malformed.line(),
                column: malformed.column(),
                preview: malformed.preview().to_string(),
            }
        }
    }
}

/// Convert a call failure into a NAPI error whose reason is JSON.
pub fn to_napi_error(error: &CallError) -> napi::Error {
    napi::Error::from_reason(map_call_error(error).to_napi_json_string())
}
