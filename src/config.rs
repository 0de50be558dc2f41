//! Process configuration from environment variables
//!
//! The configuration surface belongs to the transport layer: listen port and
//! the artificial latency bounds injected in front of every request.

use std::env;

use crate::SubgraphError;

/// Default listen port for the inventory service
const DEFAULT_PORT: u16 = 4004;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the subgraph listens on
    pub port: u16,
}

impl ServerConfig {
    /// Lower bound of the per-request artificial latency, in milliseconds
    pub const LATENCY_MIN_MS: u64 = 50;
    /// Upper bound of the per-request artificial latency, in milliseconds
    pub const LATENCY_MAX_MS: u64 = 60;

    /// Read configuration from the environment
    ///
    /// Honors `PORT`, falling back to 4004 when unset.
    pub fn from_env() -> crate::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

fn parse_port(raw: &str) -> crate::Result<u16> {
    raw.parse::<u16>()
        .map_err(|_| SubgraphError::InvalidConfig(format!("Invalid PORT value: {}", raw)))
}
