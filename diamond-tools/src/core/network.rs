// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The network the diamond lives on, and the EIP-3085 parameters used to register it with a
//! wallet that does not know it yet.

use serde::{Deserialize, Serialize};

pub const BSC_TESTNET_CHAIN_ID: u64 = 97;
pub const BSC_TESTNET_NAME: &str = "Binance Smart Chain Testnet";
pub const BSC_TESTNET_RPC_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545/";
pub const BSC_TESTNET_EXPLORER_URL: &str = "https://testnet.bscscan.com/";
pub const BSC_TESTNET_CURRENCY_NAME: &str = "Binance Coin";
pub const BSC_TESTNET_CURRENCY_SYMBOL: &str = "BNB";
pub const BSC_TESTNET_CURRENCY_DECIMALS: u8 = 18;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid chain id {0:?}, expected a 0x-prefixed hex string")]
    InvalidChainId(String),
    #[error("chain {0} has no rpc url")]
    MissingRpcUrl(u64),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub native_currency: NativeCurrency,
    pub explorer_url: String,
}

impl NetworkConfig {
    pub fn bsc_testnet() -> Self {
        Self {
            chain_id: BSC_TESTNET_CHAIN_ID,
            name: BSC_TESTNET_NAME.to_string(),
            rpc_url: BSC_TESTNET_RPC_URL.to_string(),
            native_currency: NativeCurrency {
                name: BSC_TESTNET_CURRENCY_NAME.to_string(),
                symbol: BSC_TESTNET_CURRENCY_SYMBOL.to_string(),
                decimals: BSC_TESTNET_CURRENCY_DECIMALS,
            },
            explorer_url: BSC_TESTNET_EXPLORER_URL.to_string(),
        }
    }

    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: format_chain_id(self.chain_id),
            chain_name: self.name.clone(),
            rpc_urls: vec![self.rpc_url.clone()],
            native_currency: self.native_currency.clone(),
            block_explorer_urls: vec![self.explorer_url.clone()],
        }
    }

    /// Explorer link for a transaction hash.
    pub fn tx_url(&self, tx_hash: impl std::fmt::Display) -> String {
        format!("{}/tx/{tx_hash}", self.explorer_url.trim_end_matches('/'))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::bsc_testnet()
    }
}

/// Parameters of `wallet_addEthereumChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    pub block_explorer_urls: Vec<String>,
}

impl AddChainParams {
    pub fn chain_id(&self) -> Result<u64, NetworkError> {
        parse_chain_id(&self.chain_id)
    }

    pub fn rpc_url(&self) -> Result<&str, NetworkError> {
        let chain_id = self.chain_id()?;
        self.rpc_urls
            .first()
            .map(String::as_str)
            .ok_or(NetworkError::MissingRpcUrl(chain_id))
    }
}

/// Formats a chain id the way wallets expect it, eg `0x61`.
pub fn format_chain_id(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}

pub fn parse_chain_id(text: &str) -> Result<u64, NetworkError> {
    let invalid = || NetworkError::InvalidChainId(text.to_string());
    let digits = text.strip_prefix("0x").ok_or_else(invalid)?;
    u64::from_str_radix(digits, 16).map_err(|_| invalid())
}
