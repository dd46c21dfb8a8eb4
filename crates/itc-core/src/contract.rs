//! Read-only smart contract queries.

use serde_json::{json, Value};

use crate::error::CoreError;
use crate::methods;
use crate::node::{coerce, Node};
use crate::types::{BlockTag, CallArgs};

impl Node {
    /// Execute a message call against the state at `block` without creating
    /// a transaction. Returns the hex-encoded return data.
    pub async fn call(&self, args: &CallArgs, block: BlockTag) -> Result<String, CoreError> {
        self.query(methods::CALL, vec![json!(args), json!(block)], coerce::string)
            .await
    }

    /// Gas the message in `args` would consume.
    pub async fn estimate_gas(&self, args: &CallArgs) -> Result<u64, CoreError> {
        self.query(methods::ESTIMATE_GAS, vec![json!(args)], coerce::hex)
            .await
    }

    /// Deployed bytecode at `address`, hex-encoded.
    pub async fn get_code(&self, address: &str, block: BlockTag) -> Result<String, CoreError> {
        self.query(
            methods::GET_CODE,
            vec![json!(address), json!(block)],
            coerce::string,
        )
        .await
    }

    /// Raw value of storage slot `key` at `address`.
    pub async fn get_storage_at(
        &self,
        address: &str,
        key: &str,
        block: BlockTag,
    ) -> Result<String, CoreError> {
        self.query(
            methods::GET_STORAGE_AT,
            vec![json!(address), json!(key), json!(block)],
            coerce::string,
        )
        .await
    }

    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<Value, CoreError> {
        self.query(methods::GET_TRANSACTION_RECEIPT, vec![json!(hash)], coerce::raw)
            .await
    }

    /// Address of the contract created by transaction `hash`.
    ///
    /// A receipt without `contractAddress` (the transaction deployed nothing,
    /// or is still pending) is an invalid reply to
    /// `itcv2_getTransactionReceipt`.
    pub async fn get_contract_address_from_hash(&self, hash: &str) -> Result<String, CoreError> {
        self.query(methods::GET_TRANSACTION_RECEIPT, vec![json!(hash)], |v| {
            coerce::string(coerce::field(v, &["contractAddress"])?)
        })
        .await
    }
}
