//! Wallet capability
//!
//! Browser environments expose a globally available wallet object that
//! answers a "request accounts" call and signs transactions interactively.
//! Here that dependency is an injected trait so a stub can stand in during
//! tests. Transaction signing itself lives behind
//! [`ChainAccess`](crate::chain::ChainAccess); the wallet capability only
//! resolves the active account.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use eyre::Result;
use tracing::info;

/// The "request accounts" capability of a wallet.
///
/// Every write operation fetches the active account fresh through this
/// trait; nothing is cached.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Return the wallet's unlocked accounts. The first entry is treated as
    /// the active account.
    async fn request_accounts(&self) -> Result<Vec<Address>>;
}

/// Wallet backed by a local private-key signer.
///
/// Pairs with [`EvmChainAccess`](crate::evm::EvmChainAccess) constructed
/// from the same signer, which performs the actual signing.
pub struct LocalWallet {
    address: Address,
}

impl LocalWallet {
    /// Create a wallet answering with the signer's address.
    pub fn new(signer: &PrivateKeySigner) -> Self {
        let address = signer.address();
        info!(address = %address, "Local wallet initialized");
        Self { address }
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        Ok(vec![self.address])
    }
}
