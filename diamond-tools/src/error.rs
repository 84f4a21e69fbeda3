// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    call::TransactError,
    codec::CodecError,
    network::NetworkError,
    provider::{ProviderRpcError, WalletError},
    session::SessionError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Codec(#[from] CodecError),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("{0}")]
    Transact(#[from] TransactError),
    #[error("{0}")]
    Provider(#[from] ProviderRpcError),
    #[error("{0}")]
    Wallet(#[from] WalletError),
    #[error("{0}")]
    Network(#[from] NetworkError),
}
