//! A handle on one Intelchain endpoint and the generic query executor.
//!
//! Every typed query in [`blockchain`](crate::blockchain),
//! [`account`](crate::account) and [`contract`](crate::contract) is an
//! `impl Node` method that names its RPC method, builds `params`, and picks a
//! post-processor from [`coerce`]. [`Node::query`] does the rest: dispatch,
//! `result` extraction, and mapping every failure to extract or coerce into
//! [`CoreError::InvalidRpcReply`].

pub(crate) mod coerce;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::error::CoreError;
use crate::rpc::protocol::reply_error;
use crate::rpc::{HttpRpcClient, JsonRpc, RpcConfig};

/// Queries against one endpoint with one timeout.
///
/// Cloning is cheap: the underlying transport is shared. Use
/// [`with_endpoint`](Self::with_endpoint) / [`with_timeout`](Self::with_timeout)
/// to override either for a single call.
#[derive(Clone)]
pub struct Node {
    rpc: Arc<dyn JsonRpc>,
    endpoint: String,
    timeout: Duration,
}

impl Node {
    /// Connect over HTTP using `config`.
    pub fn new(config: RpcConfig) -> Result<Self, CoreError> {
        let rpc = HttpRpcClient::new()?;
        Ok(Self::with_rpc(Arc::new(rpc), config))
    }

    /// Use a custom transport (e.g. a test double).
    pub fn with_rpc(rpc: Arc<dyn JsonRpc>, config: RpcConfig) -> Self {
        Self {
            rpc,
            endpoint: config.endpoint,
            timeout: config.timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_endpoint(&self, endpoint: impl Into<String>) -> Self {
        Self {
            rpc: Arc::clone(&self.rpc),
            endpoint: endpoint.into(),
            timeout: self.timeout,
        }
    }

    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            rpc: Arc::clone(&self.rpc),
            endpoint: self.endpoint.clone(),
            timeout,
        }
    }

    /// Send `method` and return the whole decoded reply, `result` or not.
    pub async fn request(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        Ok(self
            .rpc
            .call(method, params, &self.endpoint, self.timeout)
            .await?)
    }

    /// Dispatch `method`, take `result` out of the reply and run `coerce` on
    /// it. Transport failures propagate as [`CoreError::Rpc`].
    pub(crate) async fn query<T, F>(
        &self,
        method: &'static str,
        params: Vec<serde_json::Value>,
        coerce: F,
    ) -> Result<T, CoreError>
    where
        F: FnOnce(serde_json::Value) -> Option<T>,
    {
        let mut reply = self.request(method, params).await?;

        let Some(result) = reply.as_object_mut().and_then(|obj| obj.remove("result")) else {
            match reply_error(&reply) {
                Some(err) => warn!(
                    rpc.method = method,
                    rpc.endpoint = %self.endpoint,
                    code = err.code,
                    message = %err.message,
                    "node returned a JSON-RPC error"
                ),
                None => warn!(
                    rpc.method = method,
                    rpc.endpoint = %self.endpoint,
                    "reply has no result"
                ),
            }
            return Err(CoreError::invalid_reply(method, &self.endpoint));
        };

        coerce(result).ok_or_else(|| {
            warn!(
                rpc.method = method,
                rpc.endpoint = %self.endpoint,
                "reply result has an unexpected shape"
            );
            CoreError::invalid_reply(method, &self.endpoint)
        })
    }
}
