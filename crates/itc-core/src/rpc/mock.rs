use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::RpcError;

use super::JsonRpc;

/// One call seen by [`MockRpc`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Vec<serde_json::Value>,
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Clone)]
enum Canned {
    Reply(serde_json::Value),
    Timeout,
}

/// A mock JSON-RPC transport for testing. Returns canned replies keyed by
/// method (optionally pinned to an endpoint) and records every call.
///
/// Methods without a canned reply get a JSON-RPC "method not found" error
/// body, i.e. a reply with no `result`.
pub struct MockRpc {
    by_endpoint: HashMap<(String, String), Canned>,
    by_method: HashMap<String, Canned>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            by_endpoint: HashMap::new(),
            by_method: HashMap::new(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls()
            .pop()
            .expect("mock must have received at least one call")
    }
}

pub struct MockRpcBuilder {
    by_endpoint: HashMap<(String, String), Canned>,
    by_method: HashMap<String, Canned>,
}

impl MockRpcBuilder {
    /// Answer `method` with `{"jsonrpc": "2.0", "id": 1, "result": result}`.
    pub fn with_result(self, method: &str, result: serde_json::Value) -> Self {
        self.with_reply(method, success_reply(result))
    }

    /// Answer `method` with an arbitrary decoded reply document.
    pub fn with_reply(mut self, method: &str, reply: serde_json::Value) -> Self {
        self.by_method.insert(method.to_owned(), Canned::Reply(reply));
        self
    }

    /// Answer `method` only when it is sent to `endpoint`.
    pub fn with_result_at(mut self, endpoint: &str, method: &str, result: serde_json::Value) -> Self {
        self.by_endpoint.insert(
            (endpoint.to_owned(), method.to_owned()),
            Canned::Reply(success_reply(result)),
        );
        self
    }

    /// Fail `method` on `endpoint` with a timeout.
    pub fn with_timeout_at(mut self, endpoint: &str, method: &str) -> Self {
        self.by_endpoint
            .insert((endpoint.to_owned(), method.to_owned()), Canned::Timeout);
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            by_endpoint: self.by_endpoint,
            by_method: self.by_method,
            calls: Mutex::new(Vec::new()),
        }
    }
}

fn success_reply(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": result})
}

#[async_trait]
impl JsonRpc for MockRpc {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, RpcError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall {
                method: method.to_owned(),
                params,
                endpoint: endpoint.to_owned(),
                timeout,
            });

        let canned = self
            .by_endpoint
            .get(&(endpoint.to_owned(), method.to_owned()))
            .or_else(|| self.by_method.get(method))
            .cloned();
        match canned {
            Some(Canned::Reply(reply)) => Ok(reply),
            Some(Canned::Timeout) => Err(RpcError::Timeout {
                endpoint: endpoint.to_owned(),
                timeout,
            }),
            None => Ok(serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32601, "message": format!("the method {method} does not exist")}
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn endpoint_specific_reply_wins_over_method_reply() {
        let rpc = MockRpc::builder()
            .with_result("itcv2_getBalance", serde_json::json!(1))
            .with_result_at("http://s1", "itcv2_getBalance", serde_json::json!(2))
            .build();

        let s0 = rpc
            .call("itcv2_getBalance", Vec::new(), "http://s0", Duration::from_secs(1))
            .await
            .unwrap();
        let s1 = rpc
            .call("itcv2_getBalance", Vec::new(), "http://s1", Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(s0["result"], 1);
        assert_eq!(s1["result"], 2);
        assert_eq!(rpc.calls().len(), 2);
        assert_eq!(rpc.last_call().endpoint, "http://s1");
    }

    #[tokio::test]
    async fn unknown_method_replies_without_result() {
        let rpc = MockRpc::builder().build();
        let reply = rpc
            .call("itcv2_unknown", Vec::new(), "http://s0", Duration::from_secs(1))
            .await
            .unwrap();
        assert!(reply.get("result").is_none());
        assert_eq!(reply["error"]["code"], -32601);
    }
}
