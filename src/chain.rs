//! Chain access capability
//!
//! Abstracts the node-facing side of the facade: read calls, transaction
//! submission and receipt waiting. The production implementation is
//! [`EvmChainAccess`](crate::evm::EvmChainAccess); tests implement the trait
//! with an in-process stub.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use eyre::Result;

/// A write transaction handed to the chain-access backend.
///
/// `data` is ABI-encoded calldata; `value` is the native amount attached to
/// the transaction. Gas fields left unset are estimated node-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRequest {
    /// Sender (the wallet's active account)
    pub from: Address,
    /// Contract being called
    pub to: Address,
    /// ABI-encoded calldata
    pub data: Bytes,
    /// Native value sent with the call
    pub value: U256,
    /// Gas price in wei, if pinned by configuration
    pub gas_price: Option<u128>,
    /// Gas limit, if pinned by configuration
    pub gas_limit: Option<u64>,
}

/// Receipt of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// True if the transaction succeeded on-chain
    pub status: bool,
}

/// Notice delivered to a submit callback the moment a write operation
/// settles on an outcome.
///
/// The two cases are deliberately distinguishable: the approval operation can
/// finish without submitting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitNotice {
    /// Nothing was submitted; the requested state was already in place.
    Skipped,
    /// The node accepted the transaction under this hash. Acceptance, not
    /// confirmation - the receipt follows separately.
    Submitted(TxHash),
}

/// Callback invoked once per write operation with a [`SubmitNotice`].
pub type SubmitCallback<'a> = dyn Fn(SubmitNotice) + Send + Sync + 'a;

/// Node-facing operations the facade depends on.
///
/// Implementations are expected to propagate wallet, node and contract
/// failures unmodified; the facade performs no retries.
#[async_trait]
pub trait ChainAccess: Send + Sync {
    /// Execute a read-only contract call and return the raw ABI-encoded
    /// result.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;

    /// Sign and submit a write transaction, returning its hash as soon as
    /// the node accepts it.
    async fn submit(&self, tx: TxRequest) -> Result<TxHash>;

    /// Wait for the receipt of a previously submitted transaction.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt>;
}
