//! JSON-RPC 2.0 envelope types.

use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

/// Calls are unary and sequential per request, so the id never needs to vary.
pub const REQUEST_ID: u64 = 1;

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub(crate) id: u64,
    pub(crate) jsonrpc: &'static str,
    pub(crate) method: &'a str,
    pub(crate) params: Vec<serde_json::Value>,
}

impl<'a> JsonRpcRequest<'a> {
    pub(crate) fn new(method: &'a str, params: Vec<serde_json::Value>) -> Self {
        Self {
            id: REQUEST_ID,
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
        }
    }
}

/// The `error` member of a failed reply: `{"code": <int>, "message": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Extract a standard JSON-RPC error object from a decoded reply, if any.
///
/// Non-standard error shapes yield `None`; callers only use this for
/// diagnostics.
pub fn reply_error(reply: &serde_json::Value) -> Option<JsonRpcErrorObject> {
    let err = reply.get("error")?;
    serde_json::from_value(err.clone()).ok()
}
