//! EVM backend
//!
//! Contract bindings and the alloy-based [`ChainAccess`](crate::chain::ChainAccess)
//! implementation.

pub mod client;
pub mod contracts;

pub use client::EvmChainAccess;
