use clap::{Parser, Subcommand};

/// itc-query: read-only queries against an Intelchain node's JSON-RPC API.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node JSON-RPC URL.
    #[arg(long, default_value = "http://localhost:9500", env = "ITC_RPC_URL")]
    pub rpc_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "30", env = "ITC_RPC_TIMEOUT")]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chain id, block height, epoch, peer count, and sync state.
    Status,

    /// Fetch one block by number.
    Block {
        number: u64,

        /// Include full transaction objects instead of hashes.
        #[arg(long)]
        full_tx: bool,
    },

    /// Balance of an address, in ITC.
    Balance {
        address: String,

        /// Query every shard and print a per-shard breakdown.
        #[arg(long)]
        all_shards: bool,
    },

    /// Convert an amount in INTELLI to ITC.
    ToItc { value: String },

    /// Convert an amount in ITC to INTELLI.
    ToIntelli { value: String },

    /// List the RPC methods wrapped by this tool.
    Methods,

    /// Send an arbitrary method and print the whole reply.
    Raw {
        method: String,

        /// Positional params, each parsed as JSON (bare words are sent as
        /// strings).
        params: Vec<String>,
    },
}
