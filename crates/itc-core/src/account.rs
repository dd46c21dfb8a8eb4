//! Account balances, nonces, and transaction history.

use futures::future::join_all;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::CoreError;
use crate::methods;
use crate::node::{coerce, Node};
use crate::types::{BlockTag, HistoryQuery, ShardBalance, TxType};

impl Node {
    // ==========================================================================
    // Balances
    // ==========================================================================

    /// Current balance of `address` in INTELLI.
    pub async fn get_balance(&self, address: &str) -> Result<u128, CoreError> {
        self.query(methods::GET_BALANCE, vec![json!(address)], coerce::int)
            .await
    }

    /// Balance of `address` in INTELLI as of `block`.
    pub async fn get_balance_by_block(&self, address: &str, block: u64) -> Result<u128, CoreError> {
        self.query(
            methods::GET_BALANCE_BY_BLOCK_NUMBER,
            vec![json!(address), json!(block)],
            coerce::int,
        )
        .await
    }

    /// Balance of `address` on every shard listed by this node's sharding
    /// structure, in shard order.
    ///
    /// Shards are queried concurrently, each on its own `http` endpoint. A
    /// shard that cannot be queried is dropped from the list when
    /// `skip_error` is set and reported with `balance: None` otherwise.
    pub async fn get_balance_on_all_shards(
        &self,
        address: &str,
        skip_error: bool,
    ) -> Result<Vec<ShardBalance>, CoreError> {
        let shards = self.get_sharding_structure().await?;

        let lookups = shards.iter().map(|shard| async move {
            let balance = self
                .with_endpoint(shard.http.as_str())
                .get_balance(address)
                .await;
            (shard, balance)
        });

        let mut balances = Vec::with_capacity(shards.len());
        for (shard, result) in join_all(lookups).await {
            match result {
                Ok(balance) => balances.push(ShardBalance {
                    shard: shard.shard_id,
                    balance: Some(balance),
                }),
                Err(err @ (CoreError::Rpc(_) | CoreError::InvalidRpcReply { .. })) => {
                    warn!(
                        shard = shard.shard_id,
                        rpc.endpoint = %shard.http,
                        error = %err,
                        "balance lookup failed"
                    );
                    if !skip_error {
                        balances.push(ShardBalance {
                            shard: shard.shard_id,
                            balance: None,
                        });
                    }
                }
                Err(err) => return Err(err),
            }
        }
        Ok(balances)
    }

    /// Sum of the balances of `address` across all shards, in INTELLI.
    ///
    /// Fails with [`CoreError::IncompleteBalance`] naming the first shard
    /// whose balance could not be fetched, and with
    /// [`CoreError::BalanceOverflow`] when the sum exceeds `u128`.
    pub async fn get_total_balance(&self, address: &str) -> Result<u128, CoreError> {
        let balances = self.get_balance_on_all_shards(address, false).await?;
        balances.iter().try_fold(0u128, |total, entry| {
            let balance = entry.balance.ok_or_else(|| CoreError::IncompleteBalance {
                address: address.to_owned(),
                shard: entry.shard,
            })?;
            total
                .checked_add(balance)
                .ok_or_else(|| CoreError::BalanceOverflow {
                    address: address.to_owned(),
                })
        })
    }

    // ==========================================================================
    // Nonces & Counts
    // ==========================================================================

    pub async fn get_account_nonce(&self, address: &str, block: BlockTag) -> Result<u64, CoreError> {
        self.query(
            methods::GET_ACCOUNT_NONCE,
            vec![json!(address), json!(block)],
            coerce::int,
        )
        .await
    }

    /// Same as [`get_account_nonce`](Self::get_account_nonce).
    pub async fn get_nonce(&self, address: &str, block: BlockTag) -> Result<u64, CoreError> {
        self.get_account_nonce(address, block).await
    }

    /// Number of transactions sent by `address` up to `block`.
    pub async fn get_transaction_count(
        &self,
        address: &str,
        block: BlockTag,
    ) -> Result<u64, CoreError> {
        self.query(
            methods::GET_TRANSACTION_COUNT,
            vec![json!(address), json!(block)],
            coerce::int,
        )
        .await
    }

    pub async fn get_transactions_count(
        &self,
        address: &str,
        tx_type: TxType,
    ) -> Result<u64, CoreError> {
        self.query(
            methods::GET_TRANSACTIONS_COUNT,
            vec![json!(address), json!(tx_type)],
            coerce::int,
        )
        .await
    }

    pub async fn get_staking_transactions_count(
        &self,
        address: &str,
        tx_type: TxType,
    ) -> Result<u64, CoreError> {
        self.query(
            methods::GET_STAKING_TRANSACTIONS_COUNT,
            vec![json!(address), json!(tx_type)],
            coerce::int,
        )
        .await
    }

    // ==========================================================================
    // History
    // ==========================================================================

    /// One page of transactions involving `query.address`: hashes, or full
    /// transaction objects when `query.full_tx` is set.
    pub async fn get_transaction_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<Value>, CoreError> {
        self.query(methods::GET_TRANSACTIONS_HISTORY, vec![json!(query)], |v| {
            coerce::parse(coerce::field(v, &["transactions"])?)
        })
        .await
    }

    /// One page of staking transactions involving `query.address`.
    pub async fn get_staking_transaction_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<Value>, CoreError> {
        self.query(
            methods::GET_STAKING_TRANSACTIONS_HISTORY,
            vec![json!(query)],
            |v| coerce::parse(coerce::field(v, &["staking_transactions"])?),
        )
        .await
    }
}
