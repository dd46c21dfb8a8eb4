//! Intelchain JSON-RPC dispatch layer.
//!
//! Defines the [`JsonRpc`] trait and provides an HTTP implementation
//! ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod protocol;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::{RpcConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

pub(crate) use http_adapter::parse_endpoint;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::RpcError;

/// A single-shot JSON-RPC 2.0 transport.
///
/// Implementations send one request per call and return the whole decoded
/// reply document. Inspecting `result` or `error` is left to the caller.
#[async_trait]
pub trait JsonRpc: Send + Sync {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, RpcError>;
}
