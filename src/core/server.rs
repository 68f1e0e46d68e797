//! Function server facade.
//!
//! Binds configuration to the dispatcher. The catalogue is built once here
//! and never mutated, so clones can be handed to concurrent requests freely.

use std::sync::Arc;

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{
    ArgumentMap, Dispatcher, FunctionResponse, ToolDefinition, ToolsResponse,
};

/// The function server.
#[derive(Debug, Clone)]
pub struct FunctionServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher owning the tool catalogue.
    dispatcher: Arc<Dispatcher>,
}

impl FunctionServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(Dispatcher::new()),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The ordered tool catalogue.
    pub fn tools(&self) -> &[ToolDefinition] {
        self.dispatcher.catalogue()
    }

    /// Catalogue query response.
    pub fn list_tools(&self) -> ToolsResponse {
        ToolsResponse {
            tools: self.tools().to_vec(),
        }
    }

    /// Execute a raw function request payload.
    pub fn execute(&self, payload: &[u8]) -> FunctionResponse {
        self.dispatcher.execute_payload(payload)
    }

    /// Call a tool directly, without the envelope.
    pub fn call_tool(&self, name: &str, arguments: &ArgumentMap) -> Result<serde_json::Value> {
        Ok(self.dispatcher.call(name, arguments)?)
    }
}
