//! Transport layer for the function server.
//!
//! The server is reachable over HTTP only:
//! - `GET /tools` returns the tool catalogue
//! - `POST /execute` runs one function call
//!
//! The transport owns socket setup, CORS, request tracing and shutdown, and
//! delegates everything else to the `FunctionServer`.

mod config;
mod error;
pub mod http;
mod service;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use service::TransportService;
