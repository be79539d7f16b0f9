//! Bridge-Client: Token Bridge Contract Facade
//!
//! This crate provides a thin client-side binding for token-bridge operations
//! against two deployed contracts on an EVM chain:
//!
//! - **Bridge Manager** - burn single tokens, burn token batches, lock the
//!   native asset for bridging
//! - **Token Manager** - resolve the mapped token address for a bridged token
//! - **Bridged Token** - approval, balance, allowance and supply queries
//!
//! The hard work (signing, nonce management, gas estimation, EVM execution)
//! is delegated to the chain-access backend and the wallet. The facade only
//! translates bridge intents into contract calls, normalizes addresses,
//! scales human-readable amounts into base units, and relays submission
//! progress through an optional callback.
//!
//! ## Capability seams
//!
//! Both external collaborators are injected as traits so that a test double
//! can stand in without a live node or wallet:
//!
//! - [`ChainAccess`] - read calls, transaction submission, receipt waiting
//! - [`WalletProvider`] - the "request accounts" capability of a wallet
//!
//! [`EvmChainAccess`](evm::EvmChainAccess) is the production backend, built
//! on an alloy HTTP provider with a local signer.

pub mod address;
pub mod chain;
pub mod client;
pub mod config;
pub mod evm;
pub mod units;
pub mod wallet;

// Re-export commonly used items at the crate root
pub use chain::{ChainAccess, SubmitCallback, SubmitNotice, TxReceipt, TxRequest};
pub use client::{ApprovalOutcome, BridgeClient};
pub use config::GasConfig;
pub use units::{to_base_units, NATIVE_DECIMALS};
pub use wallet::{LocalWallet, WalletProvider};
