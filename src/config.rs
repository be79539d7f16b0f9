//! Gas configuration
//!
//! The facade carries an explicit [`GasConfig`] injected at construction
//! instead of reading process-wide environment variables on every write.
//! [`GasConfig::load`] remains as a convenience for deployments that still
//! configure gas through `GAS_PRICE` / `GAS_LIMIT`.

use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Gas price and limit applied to write transactions.
///
/// Fields left unset are filled in by the chain-access backend (node-side
/// estimation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GasConfig {
    /// Gas price in wei
    #[serde(default)]
    pub gas_price: Option<u128>,
    /// Gas limit in units
    #[serde(default)]
    pub gas_limit: Option<u64>,
}

impl GasConfig {
    /// Load gas configuration, reading a `.env` file if present and then the
    /// process environment.
    pub fn load() -> Result<Self> {
        if Path::new(".env").exists() {
            dotenvy::from_filename(".env").wrap_err("Failed to load .env file")?;
        }
        Self::from_env()
    }

    /// Read `GAS_PRICE` and `GAS_LIMIT` from the environment. Both are
    /// optional; set values must parse as integers.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            gas_price: env::var("GAS_PRICE")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .wrap_err("GAS_PRICE must be a valid integer (wei)")?,
            gas_limit: env::var("GAS_LIMIT")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .wrap_err("GAS_LIMIT must be a valid integer")?,
        })
    }
}
