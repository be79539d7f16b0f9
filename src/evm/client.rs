//! EVM chain-access backend
//!
//! Implements [`ChainAccess`] on top of an alloy HTTP provider with a local
//! signer attached, so write transactions submitted by the facade are signed
//! before broadcast.

use std::time::Duration;

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{Address, Bytes, TxHash},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use async_trait::async_trait;
use eyre::{eyre, Result};
use tracing::{debug, info};

use crate::chain::{ChainAccess, TxReceipt, TxRequest};

/// How often the receipt wait loop polls the node.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default bound on how long [`ChainAccess::wait_for_receipt`] polls before
/// giving up.
const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(120);

/// Chain access over HTTP JSON-RPC with signing capabilities.
pub struct EvmChainAccess {
    /// The alloy provider with wallet attached
    provider: alloy::providers::fillers::FillProvider<
        alloy::providers::fillers::JoinFill<
            alloy::providers::Identity,
            alloy::providers::fillers::WalletFiller<EthereumWallet>,
        >,
        RootProvider<Http<Client>>,
        Http<Client>,
        Ethereum,
    >,
    /// Signer address
    signer_address: Address,
    /// Bound on receipt polling
    receipt_timeout: Duration,
}

impl EvmChainAccess {
    /// Create a new chain-access backend from an RPC URL and a signer.
    pub fn new(rpc_url: &str, signer: PrivateKeySigner) -> Result<Self> {
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let provider = ProviderBuilder::new().wallet(wallet).on_http(
            rpc_url
                .parse()
                .map_err(|e| eyre!("Invalid RPC URL: {}", e))?,
        );

        info!(
            rpc_url = %rpc_url,
            address = %signer_address,
            "EVM chain access initialized"
        );

        Ok(Self {
            provider,
            signer_address,
            receipt_timeout: DEFAULT_RECEIPT_TIMEOUT,
        })
    }

    /// Create from a hex-encoded private key.
    pub fn from_private_key(rpc_url: &str, private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| eyre!("Invalid private key: {}", e))?;
        Self::new(rpc_url, signer)
    }

    /// Override the receipt-wait bound.
    pub fn with_receipt_timeout(mut self, timeout: Duration) -> Self {
        self.receipt_timeout = timeout;
        self
    }

    /// Get the signer's address.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Get the current block number.
    pub async fn get_block_number(&self) -> Result<u64> {
        let block = self.provider.get_block_number().await?;
        Ok(block)
    }
}

#[async_trait]
impl ChainAccess for EvmChainAccess {
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let request = TransactionRequest::default().to(to).input(data.into());
        let result = self.provider.call(&request).await?;
        Ok(result)
    }

    async fn submit(&self, tx: TxRequest) -> Result<TxHash> {
        let mut request = TransactionRequest::default()
            .to(tx.to)
            .input(tx.data.into())
            .value(tx.value);
        request.from = Some(tx.from);
        request.gas_price = tx.gas_price;
        request.gas = tx.gas_limit;

        let pending = self.provider.send_transaction(request).await?;
        let tx_hash = *pending.tx_hash();
        debug!(tx_hash = %tx_hash, "Transaction accepted by node");

        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt> {
        let start = std::time::Instant::now();

        while start.elapsed() < self.receipt_timeout {
            if let Some(receipt) = self.provider.get_transaction_receipt(tx_hash).await? {
                return Ok(TxReceipt {
                    tx_hash,
                    block_number: receipt.block_number,
                    status: receipt.status(),
                });
            }
            tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        }

        Err(eyre!(
            "Transaction {} not confirmed after {:?}",
            tx_hash,
            self.receipt_timeout
        ))
    }
}
