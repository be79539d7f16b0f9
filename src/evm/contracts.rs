//! Bridge contract ABI definitions
//!
//! Uses alloy's sol! macro to generate type-safe bindings. These are the
//! fixed descriptors the facade reuses on every call; no ABI fragments are
//! built at runtime.

use alloy::sol;

sol! {
    /// Bridge manager contract: burns bridged tokens and locks the native
    /// asset for transfer to the remote chain.
    #[sol(rpc)]
    contract BridgeManager {
        /// Burn a fungible token amount on behalf of `recipient`
        function burnToken(address token, uint256 amount, address recipient) external;

        /// Burn a batch of multi-token ids; `tokenIds` and `amounts` are
        /// parallel arrays and must be equal length (enforced by the
        /// contract, not the client)
        function burnTokens(
            address token,
            uint256[] calldata tokenIds,
            address recipient,
            uint256[] calldata amounts
        ) external;

        /// Lock the native asset; the attached value must equal `amount`
        function lockNative(uint256 amount, address recipient) external payable;
    }

    /// Token manager contract: registry of bridged token mappings.
    #[sol(rpc)]
    contract TokenManager {
        /// Mapped token address for a source token; zero address if unmapped
        function mappedTokens(address token) external view returns (address);
    }

    /// Bridged token surface used by the facade.
    #[sol(rpc)]
    contract BridgedToken {
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function isApprovedForAll(address account, address operator) external view returns (bool);
        function setApprovalForAll(address operator, bool approved) external;
    }

    /// Multi-token balance query. Kept in its own interface so the selector
    /// does not collide with the fungible `balanceOf` above.
    #[sol(rpc)]
    contract MultiToken {
        function balanceOf(address account, uint256 id) external view returns (uint256);
    }
}
