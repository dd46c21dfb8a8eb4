//! Shared test helpers for `itc-core` unit tests.
//!
//! Builds [`Node`] handles over a [`MockRpc`] and canned node replies so
//! wrapper tests across modules share one source of dummy data.

use std::sync::Arc;
use std::time::Duration;

use crate::node::Node;
use crate::rpc::mock::{MockRpc, MockRpcBuilder};
use crate::rpc::RpcConfig;

pub const TEST_ENDPOINT: &str = "http://node.test:9500";
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub const SHARD0: &str = "http://s0.test:9500";
pub const SHARD1: &str = "http://s1.test:9500";

pub const ADDRESS: &str = "one1pdv9lrdwl0rg5vglh4xtyrv3wjk3wsqket7zxy";

/// A node on [`TEST_ENDPOINT`] backed by `mock`; the mock is returned so
/// tests can inspect recorded calls.
pub fn node_with(mock: MockRpcBuilder) -> (Node, Arc<MockRpc>) {
    let rpc = Arc::new(mock.build());
    let config = RpcConfig {
        endpoint: TEST_ENDPOINT.to_owned(),
        timeout: TEST_TIMEOUT,
    };
    (Node::with_rpc(rpc.clone(), config), rpc)
}

/// `itcv2_getShardingStructure` result with two shards on [`SHARD0`] and
/// [`SHARD1`].
pub fn two_shards() -> serde_json::Value {
    serde_json::json!([
        {"current": true, "http": SHARD0, "shardID": 0, "wss": "wss://s0.test"},
        {"current": false, "http": SHARD1, "shardID": 1, "wss": "wss://s1.test"}
    ])
}

/// `itcv2_getNodeMetadata` result trimmed to the fields the client reads.
pub fn node_metadata() -> serde_json::Value {
    serde_json::json!({
        "blskey": ["65f55eb3052f9e9f632b2923be594ba77c55543f5c58ee1454b9cfd658d25e06373b0f7d42a19c84768139ea294f6204"],
        "version": "Intelchain (C) 2023. intelchain, version v1.0.0",
        "network": "testnet",
        "chain-config": {
            "chain-id": 2,
            "staking-epoch": 2,
            "prestaking-epoch": 1,
        },
        "is-leader": false,
        "shard-id": 1,
        "current-epoch": 12,
        "blocks-per-epoch": 32768,
        "role": "Validator",
        "dns-zone": "t.intelchain.org",
        "is-archival": false,
        "node-unix-start-time": 1_700_000_000u64,
        "p2p-connectivity": {"total-known-peers": 12, "connected": 9, "not-connected": 3},
    })
}
