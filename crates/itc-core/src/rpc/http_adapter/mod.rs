//! JSON-RPC client for Intelchain HTTP(S) endpoints.
//!
//! Implements [`JsonRpc`](super::JsonRpc) with `reqwest`: one POST per call,
//! a per-call timeout, and typed transport failures.

mod client;
mod connection;

pub use client::HttpRpcClient;
pub(crate) use connection::parse_endpoint;
