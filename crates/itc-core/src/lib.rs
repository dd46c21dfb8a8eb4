//! Async client for the JSON-RPC interface of an Intelchain node.
//!
//! [`Node`] holds an endpoint and a timeout; every query is a method on it
//! (see the [`blockchain`], [`account`] and [`contract`] modules).
//! [`numbers`] converts amounts between ITC and INTELLI.

pub mod account;
pub mod address;
pub mod blockchain;
pub mod contract;
pub mod error;
pub mod methods;
pub mod node;
pub mod numbers;
pub mod rpc;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use address::is_valid_address;
pub use error::{ConversionError, CoreError, RpcError};
pub use node::Node;
pub use numbers::{intelli_to_itc, itc_to_intelli, INTELLI_PER_ITC};
pub use rpc::{RpcConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
