//! Dispatcher - turns execution requests into response envelopes.
//!
//! Decode → resolve aliases → coerce → invoke → envelope. Any failure along
//! the way short-circuits to an error envelope for that request only; nothing
//! here returns a transport-level error.

use tracing::{info, instrument, warn};

use super::definitions::ToolDefinition;
use super::envelope::{FunctionRequest, FunctionResponse};
use super::error::{ToolError, ToolResult};
use super::params::ArgumentMap;
use super::registry::ToolRegistry;

/// Stateless dispatcher over the tool registry.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    /// Create a dispatcher with the full tool catalogue.
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// The tool catalogue.
    pub fn catalogue(&self) -> &[ToolDefinition] {
        self.registry.catalogue()
    }

    /// Route a call without wrapping the outcome.
    pub fn call(&self, name: &str, arguments: &ArgumentMap) -> ToolResult<serde_json::Value> {
        self.registry.call_tool(name, arguments)
    }

    /// Decode a raw payload and execute it.
    ///
    /// An undecodable payload yields an error envelope with an empty
    /// request identifier.
    pub fn execute_payload(&self, payload: &[u8]) -> FunctionResponse {
        match serde_json::from_slice::<FunctionRequest>(payload) {
            Ok(request) => self.execute(&request),
            Err(e) => {
                warn!("Failed to decode function request: {}", e);
                FunctionResponse::from_error("", &ToolError::MalformedRequest)
            }
        }
    }

    /// Execute a decoded request.
    #[instrument(skip_all, fields(request_id = %request.request_id, function = %request.function_name))]
    pub fn execute(&self, request: &FunctionRequest) -> FunctionResponse {
        info!(
            "Function call: {} with arguments: {}",
            request.function_name,
            request
                .arguments
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );

        match self.call(&request.function_name, &request.arguments) {
            Ok(result) => FunctionResponse::success(&request.request_id, result),
            Err(e) => {
                warn!("Function {} failed: {}", request.function_name, e);
                FunctionResponse::from_error(&request.request_id, &e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn execute(dispatcher: &Dispatcher, body: serde_json::Value) -> serde_json::Value {
        serde_json::to_value(dispatcher.execute_payload(body.to_string().as_bytes())).unwrap()
    }

    #[test]
    fn test_execute_success_echoes_request_id() {
        let dispatcher = Dispatcher::new();
        let response = execute(
            &dispatcher,
            json!({ "request_id": "abc", "function_name": "factorial", "arguments": { "n": 0 } }),
        );
        assert_eq!(
            response,
            json!({ "request_id": "abc", "success": true, "result": "1" })
        );
    }

    #[test]
    fn test_execute_operation_failure() {
        let dispatcher = Dispatcher::new();
        let response = execute(
            &dispatcher,
            json!({ "request_id": "d", "function_name": "divide", "arguments": { "a": 1, "b": 0 } }),
        );
        assert_eq!(
            response,
            json!({ "request_id": "d", "success": false, "error": "Cannot divide by zero" })
        );
    }

    #[test]
    fn test_execute_unknown_function() {
        let dispatcher = Dispatcher::new();
        let response = execute(
            &dispatcher,
            json!({ "request_id": "u", "function_name": "frobnicate", "arguments": {} }),
        );
        assert_eq!(response["success"], json!(false));
        assert_eq!(response["error"], json!("Unknown function: frobnicate"));
    }

    #[test]
    fn test_execute_missing_argument_names_received_keys() {
        let dispatcher = Dispatcher::new();
        let response = execute(
            &dispatcher,
            json!({ "request_id": "m", "function_name": "sum", "arguments": { "nums": [1], "other": 2 } }),
        );
        let error = response["error"].as_str().unwrap();
        assert!(error.starts_with("Missing list argument"));
        assert!(error.ends_with("Received: nums, other"));
    }

    #[test]
    fn test_missing_argument_keeps_caller_key_order() {
        let dispatcher = Dispatcher::new();
        let response = dispatcher.execute_payload(
            br#"{"request_id": "o", "function_name": "max", "arguments": {"zeta": [1], "alpha": 2}}"#,
        );
        let FunctionResponse::Error { error, .. } = response else {
            panic!("expected an error envelope");
        };
        assert!(error.ends_with("Received: zeta, alpha"), "{}", error);
    }

    #[test]
    fn test_execute_malformed_payload() {
        let dispatcher = Dispatcher::new();
        let payloads: [&[u8]; 5] = [
            b"not json",
            b"[]",
            br#"{"request_id": "x"}"#,
            br#"{"function_name": "sum", "arguments": [1]}"#,
            b"\xff\xfe",
        ];
        for payload in payloads {
            let response = dispatcher.execute_payload(payload);
            assert_eq!(
                response,
                FunctionResponse::error("", "Invalid request format"),
                "payload: {:?}",
                payload
            );
        }
    }
}
