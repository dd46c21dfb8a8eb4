use std::time::Duration;

/// Failures raised by the JSON-RPC dispatcher itself, before any
/// interpretation of the decoded reply.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("request to {endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: String, timeout: Duration },

    #[error("request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed JSON-RPC response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures converting between ITC and INTELLI.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("`{0}` is not a decimal number")]
    InvalidNumber(String),

    #[error("non-finite float {0} cannot be converted")]
    NonFinite(f64),

    #[error("{0} has too many digits to print in full")]
    OutOfRange(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The node answered, but without a usable `result` for `method`.
    #[error("unexpected reply to {method} from {endpoint}")]
    InvalidRpcReply { method: String, endpoint: String },

    #[error("balance unavailable on shard {shard} for {address}")]
    IncompleteBalance { address: String, shard: u32 },

    #[error("total balance of {address} does not fit in 128 bits")]
    BalanceOverflow { address: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    pub fn invalid_reply(method: &str, endpoint: &str) -> Self {
        Self::InvalidRpcReply {
            method: method.to_owned(),
            endpoint: endpoint.to_owned(),
        }
    }
}
