//! Client configuration shared by every query.

use std::time::Duration;

use crate::error::CoreError;

use super::parse_endpoint;

/// Endpoint used when the caller does not supply one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9500";

/// Upper bound on a single request/response round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ==============================================================================
// RPC Config
// ==============================================================================

/// Where and how long to talk to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl RpcConfig {
    /// Build a validated config. The endpoint must be an HTTP(S) URL and the
    /// timeout must be non-zero.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let endpoint = endpoint.into();
        parse_endpoint(&endpoint).map_err(|e| CoreError::Config(e.to_string()))?;
        if timeout.is_zero() {
            return Err(CoreError::Config("timeout must be greater than zero".to_owned()));
        }
        Ok(Self { endpoint, timeout })
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
