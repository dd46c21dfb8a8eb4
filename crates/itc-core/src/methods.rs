//! JSON-RPC method names understood by Intelchain nodes.

// Node / network
pub const GET_CURRENT_BAD_BLOCKS: &str = "itcv2_getCurrentBadBlocks";
pub const CHAIN_ID: &str = "itcv2_chainId";
pub const GET_NODE_METADATA: &str = "itcv2_getNodeMetadata";
pub const GET_PEER_INFO: &str = "itcv2_getPeerInfo";
pub const PROTOCOL_VERSION: &str = "itcv2_protocolVersion";
pub const NET_PEER_COUNT: &str = "net_peerCount";
pub const NET_VERSION: &str = "net_version";
pub const IN_SYNC: &str = "itcv2_inSync";
pub const BEACON_IN_SYNC: &str = "itcv2_beaconInSync";

// Sharding
pub const GET_SHARDING_STRUCTURE: &str = "itcv2_getShardingStructure";

// Current network status
pub const GET_LEADER: &str = "itcv2_getLeader";
pub const IS_LAST_BLOCK: &str = "itcv2_isLastBlock";
pub const EPOCH_LAST_BLOCK: &str = "itcv2_epochLastBlock";
pub const GET_CIRCULATING_SUPPLY: &str = "itcv2_getCirculatingSupply";
pub const GET_TOTAL_SUPPLY: &str = "itcv2_getTotalSupply";
pub const BLOCK_NUMBER: &str = "itcv2_blockNumber";
pub const GET_EPOCH: &str = "itcv2_getEpoch";
pub const GET_LAST_CROSS_LINKS: &str = "itcv2_getLastCrossLinks";
pub const GAS_PRICE: &str = "itcv2_gasPrice";

// Blocks
pub const LATEST_HEADER: &str = "itcv2_latestHeader";
pub const GET_HEADER_BY_NUMBER: &str = "itcv2_getHeaderByNumber";
pub const GET_LATEST_CHAIN_HEADERS: &str = "itcv2_getLatestChainHeaders";
pub const GET_BLOCK_BY_NUMBER: &str = "itcv2_getBlockByNumber";
pub const GET_BLOCK_BY_HASH: &str = "itcv2_getBlockByHash";
pub const GET_BLOCK_TX_COUNT_BY_NUMBER: &str = "itcv2_getBlockTransactionCountByNumber";
pub const GET_BLOCK_TX_COUNT_BY_HASH: &str = "itcv2_getBlockTransactionCountByHash";
pub const GET_BLOCK_STAKING_TX_COUNT_BY_NUMBER: &str =
    "itcv2_getBlockStakingTransactionCountByNumber";
pub const GET_BLOCK_STAKING_TX_COUNT_BY_HASH: &str = "itcv2_getBlockStakingTransactionCountByHash";
pub const GET_BLOCKS: &str = "itcv2_getBlocks";
pub const GET_BLOCK_SIGNERS: &str = "itcv2_getBlockSigners";
pub const GET_BLOCK_SIGNER_KEYS: &str = "itcv2_getBlockSignerKeys";
pub const IS_BLOCK_SIGNER: &str = "itcv2_isBlockSigner";
pub const GET_SIGNED_BLOCKS: &str = "itcv2_getSignedBlocks";
pub const GET_VALIDATORS: &str = "itcv2_getValidators";
pub const GET_VALIDATOR_KEYS: &str = "itcv2_getValidatorKeys";

// Accounts
pub const GET_BALANCE: &str = "itcv2_getBalance";
pub const GET_BALANCE_BY_BLOCK_NUMBER: &str = "itcv2_getBalanceByBlockNumber";
pub const GET_ACCOUNT_NONCE: &str = "itcv2_getAccountNonce";
pub const GET_TRANSACTION_COUNT: &str = "itcv2_getTransactionCount";
pub const GET_TRANSACTIONS_COUNT: &str = "itcv2_getTransactionsCount";
pub const GET_STAKING_TRANSACTIONS_COUNT: &str = "itcv2_getStakingTransactionsCount";
pub const GET_TRANSACTIONS_HISTORY: &str = "itcv2_getTransactionsHistory";
pub const GET_STAKING_TRANSACTIONS_HISTORY: &str = "itcv2_getStakingTransactionsHistory";

// Contracts
pub const CALL: &str = "itcv2_call";
pub const ESTIMATE_GAS: &str = "itcv2_estimateGas";
pub const GET_CODE: &str = "itcv2_getCode";
pub const GET_STORAGE_AT: &str = "itcv2_getStorageAt";
pub const GET_TRANSACTION_RECEIPT: &str = "itcv2_getTransactionReceipt";

/// Every method this crate wraps, grouped as above.
pub const ALL: &[&str] = &[
    GET_CURRENT_BAD_BLOCKS,
    CHAIN_ID,
    GET_NODE_METADATA,
    GET_PEER_INFO,
    PROTOCOL_VERSION,
    NET_PEER_COUNT,
    NET_VERSION,
    IN_SYNC,
    BEACON_IN_SYNC,
    GET_SHARDING_STRUCTURE,
    GET_LEADER,
    IS_LAST_BLOCK,
    EPOCH_LAST_BLOCK,
    GET_CIRCULATING_SUPPLY,
    GET_TOTAL_SUPPLY,
    BLOCK_NUMBER,
    GET_EPOCH,
    GET_LAST_CROSS_LINKS,
    GAS_PRICE,
    LATEST_HEADER,
    GET_HEADER_BY_NUMBER,
    GET_LATEST_CHAIN_HEADERS,
    GET_BLOCK_BY_NUMBER,
    GET_BLOCK_BY_HASH,
    GET_BLOCK_TX_COUNT_BY_NUMBER,
    GET_BLOCK_TX_COUNT_BY_HASH,
    GET_BLOCK_STAKING_TX_COUNT_BY_NUMBER,
    GET_BLOCK_STAKING_TX_COUNT_BY_HASH,
    GET_BLOCKS,
    GET_BLOCK_SIGNERS,
    GET_BLOCK_SIGNER_KEYS,
    IS_BLOCK_SIGNER,
    GET_SIGNED_BLOCKS,
    GET_VALIDATORS,
    GET_VALIDATOR_KEYS,
    GET_BALANCE,
    GET_BALANCE_BY_BLOCK_NUMBER,
    GET_ACCOUNT_NONCE,
    GET_TRANSACTION_COUNT,
    GET_TRANSACTIONS_COUNT,
    GET_STAKING_TRANSACTIONS_COUNT,
    GET_TRANSACTIONS_HISTORY,
    GET_STAKING_TRANSACTIONS_HISTORY,
    CALL,
    ESTIMATE_GAS,
    GET_CODE,
    GET_STORAGE_AT,
    GET_TRANSACTION_RECEIPT,
];
