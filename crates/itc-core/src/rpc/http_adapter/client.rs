use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::super::protocol::JsonRpcRequest;
use super::super::JsonRpc;
use super::connection::parse_endpoint;

/// Intelchain JSON-RPC client over HTTP(S).
///
/// Holds only the `reqwest` connection pool; endpoint and timeout are chosen
/// per call, so one client can serve every shard.
#[derive(Clone)]
pub struct HttpRpcClient {
    client: reqwest::Client,
}

impl HttpRpcClient {
    pub fn new() -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::Config(format!("build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonRpc for HttpRpcClient {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, RpcError> {
        let url = parse_endpoint(endpoint)?;
        debug!(
            rpc.method = method,
            rpc.endpoint = endpoint,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest::new(method, params);

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .json(&req)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, timeout, e))?;
        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(|e| transport_error(endpoint, timeout, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(endpoint, timeout, e))?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");

        serde_json::from_str(&body).map_err(|source| RpcError::MalformedResponse {
            endpoint: endpoint.to_owned(),
            source,
        })
    }
}

/// Split `reqwest` failures into the timeout case and everything else.
fn transport_error(endpoint: &str, timeout: Duration, err: reqwest::Error) -> RpcError {
    if err.is_timeout() {
        RpcError::Timeout {
            endpoint: endpoint.to_owned(),
            timeout,
        }
    } else {
        RpcError::RequestFailed {
            endpoint: endpoint.to_owned(),
            source: err,
        }
    }
}
