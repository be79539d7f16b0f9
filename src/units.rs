//! Decimal amount scaling
//!
//! Converts human-readable decimal amounts into on-chain base units
//! (`amount * 10^decimals`). Uses `BigDecimal` rather than floats so large
//! token amounts scale without precision loss; any remaining fractional part
//! after scaling is truncated toward zero.

use alloy::primitives::U256;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use eyre::{eyre, Result};
use std::str::FromStr;

/// Decimal places of the chain's native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Scale a decimal amount to the token's smallest unit.
///
/// Truncates toward zero if the scaled value still carries a fractional
/// part (e.g. `1.2345678` with 6 decimals becomes `1234567`).
pub fn to_base_units(amount: &BigDecimal, decimals: u8) -> Result<U256> {
    if *amount < BigDecimal::zero() {
        return Err(eyre!("Amount must not be negative: {}", amount));
    }

    // BigDecimal::new(d, scale) is d * 10^(-scale); a negative scale multiplies.
    let factor = BigDecimal::new(BigInt::from(1), -i64::from(decimals));
    let scaled = (amount * &factor).with_scale_round(0, RoundingMode::Down);
    let (digits, _) = scaled.into_bigint_and_exponent();

    U256::from_str(&digits.to_string())
        .map_err(|e| eyre!("Amount {} does not fit in uint256: {}", amount, e))
}
