//! Math Function Server Library
//!
//! A local HTTP service that advertises a catalogue of arithmetic tools and
//! executes one of them per request, for LLM function-calling.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server facade and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **math**: stateless arithmetic operations
//!   - **tools**: tool catalogue, alias resolution, coercion and dispatch
//!
//! # Example
//!
//! ```rust
//! use math_function_server::{Config, FunctionServer};
//!
//! let server = FunctionServer::new(Config::default());
//! let response = server.execute(
//!     br#"{"request_id": "1", "function_name": "sum", "arguments": {"numbers": [1, 2, 3]}}"#,
//! );
//! assert!(response.is_success());
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, FunctionServer, Result};
