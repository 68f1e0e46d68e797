//! Tools domain module.
//!
//! This module advertises the tool catalogue and dispatches function calls.
//! Callers (typically an LLM orchestration layer) often drift from the
//! advertised parameter names, so each parameter accepts an ordered list of
//! aliases.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations grouped by kind
//! - `params.rs` - Parameter specs, alias tables and resolution
//! - `value.rs` - Untyped argument values and coercions
//! - `registry.rs` - Catalogue and name-based routing
//! - `dispatcher.rs` - Request decoding and response envelopes
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod dispatcher;
mod envelope;
mod error;
pub mod params;
mod registry;
mod value;

pub use definitions::{FunctionTool, ParametersSchema, PropertySchema, ToolDefinition};
pub use dispatcher::Dispatcher;
pub use envelope::{FunctionRequest, FunctionResponse, ToolsResponse};
pub use error::{ErrorKind, ToolError, ToolResult};
pub use params::{ArgumentMap, Arguments, ParamKind, ParamSpec};
pub use registry::ToolRegistry;
pub use value::{ArgValue, CoercionError};
