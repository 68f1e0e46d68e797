//! Request and response envelopes for function execution.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::definitions::ToolDefinition;
use super::error::ToolError;
use super::params::ArgumentMap;

/// A decoded function execution request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionRequest {
    /// Opaque identifier echoed back in the response.
    #[serde(default)]
    pub request_id: String,

    /// Name of the tool to call.
    pub function_name: String,

    /// Argument name to untyped value.
    #[serde(default)]
    pub arguments: ArgumentMap,
}

/// Outcome of a function execution request.
///
/// Serializes as `{"request_id", "success": true, "result"}` or
/// `{"request_id", "success": false, "error"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionResponse {
    Success { request_id: String, result: Value },
    Error { request_id: String, error: String },
}

impl FunctionResponse {
    /// Create a successful response.
    pub fn success(request_id: impl Into<String>, result: Value) -> Self {
        Self::Success {
            request_id: request_id.into(),
            result,
        }
    }

    /// Create a failed response.
    pub fn error(request_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Error {
            request_id: request_id.into(),
            error: error.into(),
        }
    }

    /// Create a failed response from a dispatch error.
    pub fn from_error(request_id: impl Into<String>, error: &ToolError) -> Self {
        Self::error(request_id, error.to_string())
    }

    pub fn request_id(&self) -> &str {
        match self {
            Self::Success { request_id, .. } | Self::Error { request_id, .. } => request_id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl Serialize for FunctionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FunctionResponse", 3)?;
        match self {
            Self::Success { request_id, result } => {
                state.serialize_field("request_id", request_id)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("result", result)?;
            }
            Self::Error { request_id, error } => {
                state.serialize_field("request_id", request_id)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Body of the tool catalogue query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let response = FunctionResponse::success("req-1", json!([2, 2, 3]));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "request_id": "req-1", "success": true, "result": [2, 2, 3] })
        );
    }

    #[test]
    fn test_error_shape() {
        let response = FunctionResponse::from_error("req-2", &ToolError::MalformedList);
        assert!(!response.is_success());
        assert_eq!(response.request_id(), "req-2");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "request_id": "req-2", "success": false, "error": "Invalid list format" })
        );
    }

    #[test]
    fn test_request_defaults() {
        let request: FunctionRequest =
            serde_json::from_str(r#"{ "function_name": "sum" }"#).unwrap();
        assert_eq!(request.request_id, "");
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn test_request_requires_function_name() {
        assert!(serde_json::from_str::<FunctionRequest>(r#"{ "request_id": "x" }"#).is_err());
    }
}
