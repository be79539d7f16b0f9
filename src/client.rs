//! Bridge client facade
//!
//! Translates bridge intents into contract calls: normalizes addresses,
//! scales human-readable amounts into base units, fetches the active account
//! from the wallet for writes, and relays submission progress through an
//! optional callback. Every operation is an independent request/response
//! exchange; no state is threaded between calls and failures propagate
//! unmodified from the chain-access backend.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use bigdecimal::BigDecimal;
use eyre::{eyre, Result};
use tracing::{debug, info};

use crate::address;
use crate::chain::{ChainAccess, SubmitCallback, SubmitNotice, TxReceipt, TxRequest};
use crate::config::GasConfig;
use crate::evm::contracts::{BridgeManager, BridgedToken, MultiToken, TokenManager};
use crate::units::{self, NATIVE_DECIMALS};
use crate::wallet::WalletProvider;

/// Outcome of [`BridgeClient::set_approval_for_all`].
///
/// The two cases are distinguishable by construction: the operation
/// short-circuits without a transaction when the operator approval is
/// already in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The manager was already an approved operator; nothing was submitted.
    AlreadyApproved,
    /// An approval transaction was submitted and mined.
    Submitted(TxReceipt),
}

/// Client facade for the bridge-manager and token-manager contracts.
///
/// Contract ABIs are fixed at compile time; addresses are bound at
/// construction. Token contracts are addressed per call and nothing is
/// cached between operations.
pub struct BridgeClient<C, W> {
    chain: C,
    wallet: W,
    manager_address: Address,
    token_manager_address: Address,
    gas: GasConfig,
}

impl<C: ChainAccess, W: WalletProvider> BridgeClient<C, W> {
    /// Create a client bound to the deployed bridge-manager and
    /// token-manager contracts.
    pub fn new(
        chain: C,
        wallet: W,
        manager_address: &str,
        token_manager_address: &str,
        gas: GasConfig,
    ) -> Result<Self> {
        let manager_address = address::normalize(manager_address)?;
        let token_manager_address = address::normalize(token_manager_address)?;

        info!(
            manager = %manager_address,
            token_manager = %token_manager_address,
            "Bridge client initialized"
        );

        Ok(Self {
            chain,
            wallet,
            manager_address,
            token_manager_address,
            gas,
        })
    }

    /// The bridge-manager contract address.
    pub fn manager_address(&self) -> Address {
        self.manager_address
    }

    /// The token-manager contract address.
    pub fn token_manager_address(&self) -> Address {
        self.token_manager_address
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Grant the bridge manager operator approval on a token contract.
    ///
    /// Checks `isApprovedForAll(account, manager)` first; if the approval is
    /// already in place, the callback receives [`SubmitNotice::Skipped`] and
    /// no transaction is submitted. Otherwise submits
    /// `setApprovalForAll(manager, true)` from the active account.
    pub async fn set_approval_for_all(
        &self,
        token_address: &str,
        on_submitted: Option<&SubmitCallback<'_>>,
    ) -> Result<ApprovalOutcome> {
        let token = address::normalize(token_address)?;
        let account = self.active_account().await?;

        let data = BridgedToken::isApprovedForAllCall {
            account,
            operator: self.manager_address,
        }
        .abi_encode();
        let raw = self.chain.call(token, data.into()).await?;
        let approved = BridgedToken::isApprovedForAllCall::abi_decode_returns(&raw, true)?._0;

        if approved {
            debug!(token = %token, account = %account, "Operator already approved, skipping");
            if let Some(callback) = on_submitted {
                callback(SubmitNotice::Skipped);
            }
            return Ok(ApprovalOutcome::AlreadyApproved);
        }

        let data = BridgedToken::setApprovalForAllCall {
            operator: self.manager_address,
            approved: true,
        }
        .abi_encode();
        let receipt = self
            .send_transaction(account, token, data.into(), U256::ZERO, on_submitted)
            .await?;

        Ok(ApprovalOutcome::Submitted(receipt))
    }

    /// Burn a fungible token amount on the bridge manager.
    ///
    /// `amount` is a human-readable decimal quantity, scaled by
    /// `10^decimals` (truncating) before submission.
    pub async fn burn_token(
        &self,
        token_address: &str,
        user_address: &str,
        amount: &BigDecimal,
        decimals: u8,
        on_submitted: Option<&SubmitCallback<'_>>,
    ) -> Result<TxReceipt> {
        let token = address::normalize(token_address)?;
        let recipient = address::normalize(user_address)?;
        let account = self.active_account().await?;
        let amount = units::to_base_units(amount, decimals)?;

        debug!(token = %token, recipient = %recipient, amount = %amount, "Submitting burnToken");

        let data = BridgeManager::burnTokenCall {
            token,
            amount,
            recipient,
        }
        .abi_encode();

        self.send_transaction(
            account,
            self.manager_address,
            data.into(),
            U256::ZERO,
            on_submitted,
        )
        .await
    }

    /// Burn a batch of multi-token ids on the bridge manager.
    ///
    /// `token_ids` and `amounts` are parallel sequences forwarded in order;
    /// a length mismatch is left to the contract to revert.
    pub async fn burn_tokens(
        &self,
        collection_address: &str,
        user_address: &str,
        token_ids: &[U256],
        amounts: &[U256],
        on_submitted: Option<&SubmitCallback<'_>>,
    ) -> Result<TxReceipt> {
        let collection = address::normalize(collection_address)?;
        let recipient = address::normalize(user_address)?;
        let account = self.active_account().await?;

        debug!(
            collection = %collection,
            recipient = %recipient,
            ids = token_ids.len(),
            "Submitting burnTokens"
        );

        let data = BridgeManager::burnTokensCall {
            token: collection,
            tokenIds: token_ids.to_vec(),
            recipient,
            amounts: amounts.to_vec(),
        }
        .abi_encode();

        self.send_transaction(
            account,
            self.manager_address,
            data.into(),
            U256::ZERO,
            on_submitted,
        )
        .await
    }

    /// Lock the native asset on the bridge manager for transfer to the
    /// remote chain.
    ///
    /// `amount` is scaled by the native asset's 18 decimals; the scaled
    /// value is sent both as the contract argument and as the transaction
    /// value.
    pub async fn lock_native(
        &self,
        user_address: &str,
        amount: &BigDecimal,
        on_submitted: Option<&SubmitCallback<'_>>,
    ) -> Result<TxReceipt> {
        let recipient = address::normalize(user_address)?;
        let account = self.active_account().await?;
        let amount = units::to_base_units(amount, NATIVE_DECIMALS)?;

        debug!(recipient = %recipient, amount = %amount, "Submitting lockNative");

        let data = BridgeManager::lockNativeCall { amount, recipient }.abi_encode();

        self.send_transaction(account, self.manager_address, data.into(), amount, on_submitted)
            .await
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Resolve the mapped token address for a source token on the token
    /// manager. Returns the zero address when no mapping exists
    /// (contract-defined sentinel).
    pub async fn get_mapping_for(&self, token_address: &str) -> Result<Address> {
        let token = address::normalize(token_address)?;

        let data = TokenManager::mappedTokensCall { token }.abi_encode();
        let raw = self.chain.call(self.token_manager_address, data.into()).await?;
        let mapped = TokenManager::mappedTokensCall::abi_decode_returns(&raw, true)?._0;

        Ok(mapped)
    }

    /// Fungible token balance of an address, in base units (no scaling).
    pub async fn check_balance(&self, token_address: &str, holder_address: &str) -> Result<U256> {
        let token = address::normalize(token_address)?;
        let account = address::normalize(holder_address)?;

        let data = BridgedToken::balanceOfCall { account }.abi_encode();
        let raw = self.chain.call(token, data.into()).await?;
        let balance = BridgedToken::balanceOfCall::abi_decode_returns(&raw, true)?._0;

        Ok(balance)
    }

    /// Total supply of a token, raw integer as reported by the contract.
    pub async fn total_supply(&self, token_address: &str) -> Result<U256> {
        let token = address::normalize(token_address)?;

        let data = BridgedToken::totalSupplyCall {}.abi_encode();
        let raw = self.chain.call(token, data.into()).await?;
        let supply = BridgedToken::totalSupplyCall::abi_decode_returns(&raw, true)?._0;

        Ok(supply)
    }

    /// Allowance granted by `owner_address` to the bridge manager on a
    /// token, raw integer.
    pub async fn allowance(&self, owner_address: &str, token_address: &str) -> Result<U256> {
        let owner = address::normalize(owner_address)?;
        let token = address::normalize(token_address)?;

        let data = BridgedToken::allowanceCall {
            owner,
            spender: self.manager_address,
        }
        .abi_encode();
        let raw = self.chain.call(token, data.into()).await?;
        let allowance = BridgedToken::allowanceCall::abi_decode_returns(&raw, true)?._0;

        Ok(allowance)
    }

    /// Multi-token balance of the wallet's active account for a given token
    /// id, raw integer.
    pub async fn balance_of(&self, token_address: &str, token_id: U256) -> Result<U256> {
        let token = address::normalize(token_address)?;
        let account = self.active_account().await?;

        let data = MultiToken::balanceOfCall {
            account,
            id: token_id,
        }
        .abi_encode();
        let raw = self.chain.call(token, data.into()).await?;
        let balance = MultiToken::balanceOfCall::abi_decode_returns(&raw, true)?._0;

        Ok(balance)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Fetch the wallet's active account, fresh on every write.
    async fn active_account(&self) -> Result<Address> {
        let accounts = self.wallet.request_accounts().await?;
        accounts
            .first()
            .copied()
            .ok_or_else(|| eyre!("Wallet returned no accounts"))
    }

    /// Submit a write transaction, relay the accepted hash through the
    /// callback, and await the receipt.
    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
        value: U256,
        on_submitted: Option<&SubmitCallback<'_>>,
    ) -> Result<TxReceipt> {
        let tx = TxRequest {
            from,
            to,
            data,
            value,
            gas_price: self.gas.gas_price,
            gas_limit: self.gas.gas_limit,
        };

        let tx_hash = self.chain.submit(tx).await?;
        debug!(tx_hash = %tx_hash, "Transaction submitted");

        if let Some(callback) = on_submitted {
            callback(SubmitNotice::Submitted(tx_hash));
        }

        self.chain.wait_for_receipt(tx_hash).await
    }
}
