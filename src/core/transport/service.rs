//! Transport service - starts the configured transport.

use tracing::info;

use super::{HttpTransport, TransportConfig};
use crate::core::{FunctionServer, Result};

/// Transport service - manages the transport layer for the function server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Start the transport with the given server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: FunctionServer) -> Result<()> {
        info!("Starting transport: {}", self.config.description());
        HttpTransport::new(self.config).run(server).await?;
        Ok(())
    }
}
