//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the function
//! server, including error handling, configuration, the server facade and
//! the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::FunctionServer;
pub use transport::{TransportConfig, TransportService};
