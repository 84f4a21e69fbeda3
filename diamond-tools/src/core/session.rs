// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Wallet sessions.
//!
//! A [`Session`] is an authorized account on a known chain, together with the provider that can
//! sign for it. Sessions never change: moving to another chain yields a new session and leaves
//! the old one as it was.

use std::{fmt, sync::Arc};

use alloy::primitives::Address;

use crate::{
    core::{
        network::{format_chain_id, NetworkConfig},
        provider::{InjectedProvider, ProviderRpcError},
    },
    utils::color::DebugColor,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no wallet provider found; configure a private key or keystore")]
    ProviderAbsent,
    #[error("wallet not connected")]
    NotConnected,
    #[error("user rejected the account request")]
    UserRejected,
    #[error("wallet authorized no accounts")]
    NoAccounts,
    #[error("user declined switching to chain {chain_id:#x}")]
    NetworkSwitchDenied { chain_id: u64 },
    #[error("failed to register chain {chain_id:#x}: {source}")]
    ChainRegistration {
        chain_id: u64,
        source: ProviderRpcError,
    },
    #[error("wallet is on chain {actual:#x}, expected {expected:#x}")]
    WrongNetwork { expected: u64, actual: u64 },
    #[error("{0}")]
    Provider(#[from] ProviderRpcError),
}

pub struct Session<W> {
    address: Address,
    chain_id: u64,
    provider: Arc<W>,
}

impl<W> Session<W> {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn provider(&self) -> &W {
        &self.provider
    }

    pub(crate) fn provider_handle(&self) -> Arc<W> {
        self.provider.clone()
    }

    /// Fails unless the session is on `chain_id`.
    pub fn require_chain(&self, chain_id: u64) -> Result<(), SessionError> {
        if self.chain_id == chain_id {
            Ok(())
        } else {
            Err(SessionError::WrongNetwork {
                expected: chain_id,
                actual: self.chain_id,
            })
        }
    }
}

impl<W: InjectedProvider> Session<W> {
    /// Requests account access from the injected provider, if there is one.
    pub async fn connect(injected: Option<Arc<W>>) -> Result<Self, SessionError> {
        let provider = injected.ok_or(SessionError::ProviderAbsent)?;
        let accounts = provider.request_accounts().await.map_err(|err| {
            if err.is_user_rejection() {
                SessionError::UserRejected
            } else {
                SessionError::Provider(err)
            }
        })?;
        let address = accounts.first().copied().ok_or(SessionError::NoAccounts)?;
        let chain_id = provider.chain_id().await?;
        info!(@grey,
            "connected {} on chain {}",
            address.debug_lavender(),
            format_chain_id(chain_id)
        );
        Ok(Self {
            address,
            chain_id,
            provider,
        })
    }

    /// Returns a session on the required network, asking the wallet to switch (and to register
    /// the network first if it does not know it). Does nothing if already there.
    pub async fn ensure_network(&self, network: &NetworkConfig) -> Result<Self, SessionError> {
        let target = network.chain_id;
        if self.chain_id == target {
            debug!(@grey, "already on {}", network.name);
            return Ok(self.clone());
        }

        info!(@grey, "requesting switch to {} ({})", network.name, format_chain_id(target));
        match self.provider.switch_chain(target).await {
            Ok(()) => {}
            Err(err) if err.is_unrecognized_chain() => {
                self.register_chain(network).await?;
                self.provider
                    .switch_chain(target)
                    .await
                    .map_err(|err| switch_error(target, err))?;
            }
            Err(err) => return Err(switch_error(target, err)),
        }

        let chain_id = self.provider.chain_id().await?;
        let session = Self {
            chain_id,
            ..self.clone()
        };
        session.require_chain(target)?;
        Ok(session)
    }

    async fn register_chain(&self, network: &NetworkConfig) -> Result<(), SessionError> {
        let target = network.chain_id;
        warn!(@yellow, "wallet does not know {}, requesting to add it", network.name);
        self.provider
            .add_chain(&network.add_chain_params())
            .await
            .map_err(|err| {
                error!(@red, "failed to add {}: {err}", network.name);
                if err.is_user_rejection() {
                    SessionError::NetworkSwitchDenied { chain_id: target }
                } else {
                    SessionError::ChainRegistration {
                        chain_id: target,
                        source: err,
                    }
                }
            })
    }
}

fn switch_error(chain_id: u64, err: ProviderRpcError) -> SessionError {
    if err.is_user_rejection() {
        SessionError::NetworkSwitchDenied { chain_id }
    } else {
        SessionError::Provider(err)
    }
}

impl<W> Clone for Session<W> {
    fn clone(&self) -> Self {
        Self {
            address: self.address,
            chain_id: self.chain_id,
            provider: self.provider.clone(),
        }
    }
}

impl<W> fmt::Debug for Session<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}
