//! Node, network, and block queries.
//!
//! Results the client does not interpret (headers, blocks, peer info) are
//! returned as `serde_json::Value` exactly as the node sent them.

use bigdecimal::BigDecimal;
use serde_json::{json, Value};

use crate::error::CoreError;
use crate::methods;
use crate::node::{coerce, Node};
use crate::types::{BlockOptions, ShardInfo};

impl Node {
    // ==========================================================================
    // Node / Network
    // ==========================================================================

    /// Blocks the node has rejected in the current session.
    pub async fn get_bad_blocks(&self) -> Result<Vec<Value>, CoreError> {
        self.query(methods::GET_CURRENT_BAD_BLOCKS, Vec::new(), coerce::parse)
            .await
    }

    pub async fn chain_id(&self) -> Result<u64, CoreError> {
        self.query(methods::CHAIN_ID, Vec::new(), coerce::quantity)
            .await
    }

    /// Version, network, role, chain config and peer summary of the node.
    pub async fn get_node_metadata(&self) -> Result<Value, CoreError> {
        self.query(methods::GET_NODE_METADATA, Vec::new(), coerce::raw)
            .await
    }

    pub async fn get_peer_info(&self) -> Result<Value, CoreError> {
        self.query(methods::GET_PEER_INFO, Vec::new(), coerce::raw)
            .await
    }

    pub async fn protocol_version(&self) -> Result<u64, CoreError> {
        self.query(methods::PROTOCOL_VERSION, Vec::new(), coerce::quantity)
            .await
    }

    /// Number of connected peers (`net_peerCount`, hex-encoded on the wire).
    pub async fn get_num_peers(&self) -> Result<u64, CoreError> {
        self.query(methods::NET_PEER_COUNT, Vec::new(), coerce::hex)
            .await
    }

    /// Network id (`net_version`, hex-encoded on the wire).
    pub async fn get_version(&self) -> Result<u64, CoreError> {
        self.query(methods::NET_VERSION, Vec::new(), coerce::hex)
            .await
    }

    pub async fn in_sync(&self) -> Result<bool, CoreError> {
        self.query(methods::IN_SYNC, Vec::new(), coerce::truthy)
            .await
    }

    pub async fn beacon_in_sync(&self) -> Result<bool, CoreError> {
        self.query(methods::BEACON_IN_SYNC, Vec::new(), coerce::truthy)
            .await
    }

    /// First epoch with staking enabled, from the node's chain config.
    pub async fn get_staking_epoch(&self) -> Result<u64, CoreError> {
        self.query(methods::GET_NODE_METADATA, Vec::new(), |v| {
            coerce::int(coerce::field(v, &["chain-config", "staking-epoch"])?)
        })
        .await
    }

    /// First epoch of the pre-staking era, from the node's chain config.
    pub async fn get_prestaking_epoch(&self) -> Result<u64, CoreError> {
        self.query(methods::GET_NODE_METADATA, Vec::new(), |v| {
            coerce::int(coerce::field(v, &["chain-config", "prestaking-epoch"])?)
        })
        .await
    }

    /// Shard the queried node serves.
    pub async fn get_shard(&self) -> Result<u32, CoreError> {
        self.query(methods::GET_NODE_METADATA, Vec::new(), |v| {
            coerce::int(coerce::field(v, &["shard-id"])?)
        })
        .await
    }

    // ==========================================================================
    // Sharding
    // ==========================================================================

    pub async fn get_sharding_structure(&self) -> Result<Vec<ShardInfo>, CoreError> {
        self.query(methods::GET_SHARDING_STRUCTURE, Vec::new(), coerce::parse)
            .await
    }

    // ==========================================================================
    // Current Network Status
    // ==========================================================================

    /// Address of the current leader of the queried shard.
    pub async fn get_leader_address(&self) -> Result<String, CoreError> {
        self.query(methods::GET_LEADER, Vec::new(), coerce::string)
            .await
    }

    /// Whether `block` is the last block of its epoch.
    pub async fn is_last_block(&self, block: u64) -> Result<bool, CoreError> {
        self.query(methods::IS_LAST_BLOCK, vec![json!(block)], coerce::truthy)
            .await
    }

    /// Number of the last block in `epoch`.
    pub async fn epoch_last_block(&self, epoch: u64) -> Result<u64, CoreError> {
        self.query(methods::EPOCH_LAST_BLOCK, vec![json!(epoch)], coerce::int)
            .await
    }

    /// Circulating supply in ITC.
    pub async fn get_circulating_supply(&self) -> Result<BigDecimal, CoreError> {
        self.query(methods::GET_CIRCULATING_SUPPLY, Vec::new(), coerce::decimal)
            .await
    }

    /// Fetches the total supply and checks that the reply carries a
    /// `result`, but returns nothing: the value itself is discarded.
    ///
    /// Use [`request`](Self::request) with [`methods::GET_TOTAL_SUPPLY`] to
    /// read the figure.
    pub async fn get_total_supply(&self) -> Result<(), CoreError> {
        self.query(methods::GET_TOTAL_SUPPLY, Vec::new(), |_| Some(()))
            .await
    }

    pub async fn get_block_number(&self) -> Result<u64, CoreError> {
        self.query(methods::BLOCK_NUMBER, Vec::new(), coerce::int)
            .await
    }

    pub async fn get_current_epoch(&self) -> Result<u64, CoreError> {
        self.query(methods::GET_EPOCH, Vec::new(), coerce::int)
            .await
    }

    /// Most recent cross-shard links seen by the beacon chain.
    pub async fn get_last_cross_links(&self) -> Result<Vec<Value>, CoreError> {
        self.query(methods::GET_LAST_CROSS_LINKS, Vec::new(), coerce::parse)
            .await
    }

    /// Network gas price in INTELLI.
    pub async fn get_gas_price(&self) -> Result<u64, CoreError> {
        self.query(methods::GAS_PRICE, Vec::new(), coerce::int)
            .await
    }

    // ==========================================================================
    // Blocks
    // ==========================================================================

    pub async fn get_latest_header(&self) -> Result<Value, CoreError> {
        self.query(methods::LATEST_HEADER, Vec::new(), coerce::raw)
            .await
    }

    pub async fn get_header_by_number(&self, block: u64) -> Result<Value, CoreError> {
        self.query(methods::GET_HEADER_BY_NUMBER, vec![json!(block)], coerce::raw)
            .await
    }

    /// Latest headers of both the beacon chain and the queried shard.
    pub async fn get_latest_chain_headers(&self) -> Result<Value, CoreError> {
        self.query(methods::GET_LATEST_CHAIN_HEADERS, Vec::new(), coerce::raw)
            .await
    }

    pub async fn get_block_by_number(
        &self,
        block: u64,
        options: BlockOptions,
    ) -> Result<Value, CoreError> {
        self.query(
            methods::GET_BLOCK_BY_NUMBER,
            vec![json!(block), json!(options)],
            coerce::raw,
        )
        .await
    }

    pub async fn get_block_by_hash(
        &self,
        hash: &str,
        options: BlockOptions,
    ) -> Result<Value, CoreError> {
        self.query(
            methods::GET_BLOCK_BY_HASH,
            vec![json!(hash), json!(options)],
            coerce::raw,
        )
        .await
    }

    pub async fn get_block_transaction_count_by_number(
        &self,
        block: u64,
    ) -> Result<u64, CoreError> {
        self.query(
            methods::GET_BLOCK_TX_COUNT_BY_NUMBER,
            vec![json!(block)],
            coerce::int,
        )
        .await
    }

    pub async fn get_block_transaction_count_by_hash(&self, hash: &str) -> Result<u64, CoreError> {
        self.query(
            methods::GET_BLOCK_TX_COUNT_BY_HASH,
            vec![json!(hash)],
            coerce::int,
        )
        .await
    }

    pub async fn get_block_staking_transaction_count_by_number(
        &self,
        block: u64,
    ) -> Result<u64, CoreError> {
        self.query(
            methods::GET_BLOCK_STAKING_TX_COUNT_BY_NUMBER,
            vec![json!(block)],
            coerce::int,
        )
        .await
    }

    pub async fn get_block_staking_transaction_count_by_hash(
        &self,
        hash: &str,
    ) -> Result<u64, CoreError> {
        self.query(
            methods::GET_BLOCK_STAKING_TX_COUNT_BY_HASH,
            vec![json!(hash)],
            coerce::int,
        )
        .await
    }

    /// Blocks `start..=end`.
    pub async fn get_blocks(
        &self,
        start: u64,
        end: u64,
        options: BlockOptions,
    ) -> Result<Vec<Value>, CoreError> {
        self.query(
            methods::GET_BLOCKS,
            vec![json!(start), json!(end), json!(options)],
            coerce::parse,
        )
        .await
    }

    /// Addresses of the validators that signed `block`.
    pub async fn get_block_signers(&self, block: u64) -> Result<Vec<String>, CoreError> {
        self.query(methods::GET_BLOCK_SIGNERS, vec![json!(block)], coerce::parse)
            .await
    }

    /// BLS public keys that signed `block`.
    pub async fn get_block_signers_keys(&self, block: u64) -> Result<Vec<String>, CoreError> {
        self.query(
            methods::GET_BLOCK_SIGNER_KEYS,
            vec![json!(block)],
            coerce::parse,
        )
        .await
    }

    pub async fn is_block_signer(&self, block: u64, address: &str) -> Result<bool, CoreError> {
        self.query(
            methods::IS_BLOCK_SIGNER,
            vec![json!(block), json!(address)],
            coerce::truthy,
        )
        .await
    }

    /// Number of blocks `address` signed in the last blocks-per-epoch window.
    pub async fn get_signed_blocks(&self, address: &str) -> Result<u64, CoreError> {
        self.query(methods::GET_SIGNED_BLOCKS, vec![json!(address)], coerce::int)
            .await
    }

    /// Elected validators for `epoch` with their balances.
    pub async fn get_validators(&self, epoch: u64) -> Result<Value, CoreError> {
        self.query(methods::GET_VALIDATORS, vec![json!(epoch)], coerce::raw)
            .await
    }

    pub async fn get_validator_keys(&self, epoch: u64) -> Result<Vec<String>, CoreError> {
        self.query(methods::GET_VALIDATOR_KEYS, vec![json!(epoch)], coerce::parse)
            .await
    }
}
