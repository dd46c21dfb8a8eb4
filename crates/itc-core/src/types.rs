//! Typed parameters and results for Intelchain queries.
//!
//! Most query results are passed through as `serde_json::Value`; only shapes
//! the client itself depends on (sharding structure, per-shard balances) or
//! that callers build as parameters get a dedicated type here.

use serde::{Deserialize, Serialize, Serializer};

// ==============================================================================
// Block Selection
// ==============================================================================

/// A block number or the `"latest"` tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockTag {
    Number(u64),
    #[default]
    Latest,
}

impl Serialize for BlockTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_u64(*n),
            Self::Latest => serializer.serialize_str("latest"),
        }
    }
}

impl From<u64> for BlockTag {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// Flags shared by the block-fetching methods. All default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlockOptions {
    #[serde(rename = "inclTx")]
    pub include_tx: bool,
    #[serde(rename = "fullTx")]
    pub full_tx: bool,
    #[serde(rename = "inclStaking")]
    pub include_staking_tx: bool,
    #[serde(rename = "withSigners")]
    pub include_signers: bool,
}

// ==============================================================================
// Transaction History
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxType {
    #[default]
    All,
    Sent,
    Received,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Asc,
    Desc,
}

/// Paging and filtering for the transaction history methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    pub address: String,
    #[serde(rename = "pageIndex")]
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "fullTx")]
    pub full_tx: bool,
    #[serde(rename = "txType")]
    pub tx_type: TxType,
    pub order: SortOrder,
}

impl HistoryQuery {
    /// First page of 1000 hashes, all directions, oldest first.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            page: 0,
            page_size: 1000,
            full_tx: false,
            tx_type: TxType::All,
            order: SortOrder::Asc,
        }
    }
}

// ==============================================================================
// Contract Calls
// ==============================================================================

/// Message fields for `itcv2_call` / `itcv2_estimateGas`. Unset optional
/// fields are sent as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallArgs {
    pub to: String,
    pub from: Option<String>,
    pub gas: Option<String>,
    #[serde(rename = "gasPrice")]
    pub gas_price: Option<String>,
    pub value: Option<String>,
    pub data: Option<String>,
}

impl CallArgs {
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to: address.into(),
            ..Self::default()
        }
    }
}

// ==============================================================================
// Sharding
// ==============================================================================

/// One entry of `itcv2_getShardingStructure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardInfo {
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// Whether the queried endpoint belongs to this shard.
    #[serde(default)]
    pub current: bool,
    pub http: String,
    #[serde(default)]
    pub wss: String,
}

/// Balance of one address on one shard, in INTELLI. `None` when the shard
/// could not be queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardBalance {
    pub shard: u32,
    pub balance: Option<u128>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_tag_serializes_number_or_latest() {
        assert_eq!(serde_json::to_value(BlockTag::Number(12)).unwrap(), serde_json::json!(12));
        assert_eq!(serde_json::to_value(BlockTag::Latest).unwrap(), serde_json::json!("latest"));
    }

    #[test]
    fn block_options_use_node_field_names() {
        let opts = BlockOptions {
            full_tx: true,
            include_signers: true,
            ..BlockOptions::default()
        };
        assert_eq!(
            serde_json::to_value(opts).unwrap(),
            serde_json::json!({
                "inclTx": false,
                "fullTx": true,
                "inclStaking": false,
                "withSigners": true,
            })
        );
    }

    #[test]
    fn history_query_defaults() {
        let query = HistoryQuery::new("one1abc");
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "address": "one1abc",
                "pageIndex": 0,
                "pageSize": 1000,
                "fullTx": false,
                "txType": "ALL",
                "order": "ASC",
            })
        );
    }

    #[test]
    fn call_args_send_nulls_for_unset_fields() {
        let args = CallArgs {
            data: Some("0x06fdde03".into()),
            ..CallArgs::to("0x08AE1abFE01aEA60a47663bCe0794eCCD5763c19")
        };
        let encoded = serde_json::to_value(&args).unwrap();
        assert_eq!(encoded["from"], serde_json::Value::Null);
        assert_eq!(encoded["gasPrice"], serde_json::Value::Null);
        assert_eq!(encoded["data"], "0x06fdde03");
    }

    #[test]
    fn shard_info_tolerates_missing_optional_fields() {
        let shard: ShardInfo = serde_json::from_value(serde_json::json!({
            "shardID": 1,
            "http": "https://api.s1.t.intelchain.org"
        }))
        .unwrap();
        assert_eq!(shard.shard_id, 1);
        assert!(!shard.current);
        assert!(shard.wss.is_empty());
    }
}
