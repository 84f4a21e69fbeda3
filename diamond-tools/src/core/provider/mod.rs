// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The wallet provider boundary.
//!
//! Models the subset of an [EIP-1193](https://eips.ethereum.org/EIPS/eip-1193) provider this tool
//! consumes. Every capability maps onto one provider method:
//!
//! | capability                | method                         |
//! |---------------------------|--------------------------------|
//! | `request_accounts`        | `eth_requestAccounts`          |
//! | `chain_id`                | `eth_chainId`                  |
//! | `switch_chain`            | `wallet_switchEthereumChain`   |
//! | `add_chain`               | `wallet_addEthereumChain`      |
//! | `call`                    | `eth_call`                     |
//! | `send_transaction`        | `eth_sendTransaction`          |
//! | `wait_for_confirmation`   | `eth_getTransactionReceipt`    |

use alloy::{
    primitives::{Address, Bytes, TxHash},
    transports::{RpcError, TransportErrorKind},
};

use crate::core::network::AddChainParams;

pub mod approval;
pub mod local;

pub use approval::{ApprovalRequest, Approver, AutoApprove, TerminalPrompt};
pub use local::{LocalWallet, WalletError};

/// Error returned by a wallet provider, carrying an EIP-1193 / JSON-RPC error code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("provider error {code}: {message}")]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
}

impl ProviderRpcError {
    pub const USER_REJECTED: i64 = 4001;
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL: i64 = -32603;

    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn user_rejected(request: impl std::fmt::Display) -> Self {
        Self::new(Self::USER_REJECTED, format!("user rejected {request}"))
    }

    pub fn unrecognized_chain(chain_id: u64) -> Self {
        Self::new(
            Self::UNRECOGNIZED_CHAIN,
            format!("unrecognized chain id {}", crate::core::network::format_chain_id(chain_id)),
        )
    }

    pub fn invalid_params(message: impl std::fmt::Display) -> Self {
        Self::new(Self::INVALID_PARAMS, message.to_string())
    }

    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::new(Self::INTERNAL, message.to_string())
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Self::USER_REJECTED
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Self::UNRECOGNIZED_CHAIN
    }
}

impl From<RpcError<TransportErrorKind>> for ProviderRpcError {
    fn from(err: RpcError<TransportErrorKind>) -> Self {
        match err.as_error_resp() {
            Some(payload) => Self::new(payload.code, payload.message.to_string()),
            None => Self::internal(err),
        }
    }
}

/// Outcome of a mined transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// Receipt status; `false` means the transaction reverted.
    pub success: bool,
}

/// A wallet that can authorize accounts, manage its active chain, and sign for them.
#[allow(async_fn_in_trait)]
pub trait InjectedProvider {
    /// Asks the user to expose their accounts.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderRpcError>;

    /// Chain the wallet is currently on.
    async fn chain_id(&self) -> Result<u64, ProviderRpcError>;

    /// Fails with [`ProviderRpcError::UNRECOGNIZED_CHAIN`] if the wallet does not know the chain.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderRpcError>;

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderRpcError>;

    /// Read-only call against the active chain.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderRpcError>;

    /// Signs and broadcasts a transaction from the authorized account.
    async fn send_transaction(&self, to: Address, data: Bytes) -> Result<TxHash, ProviderRpcError>;

    /// Blocks until the transaction is mined. Never times out.
    async fn wait_for_confirmation(&self, tx_hash: TxHash)
        -> Result<Confirmation, ProviderRpcError>;
}
