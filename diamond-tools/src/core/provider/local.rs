// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A wallet backed by a local signer and JSON-RPC endpoints.
//!
//! It keeps the state a browser wallet keeps: the networks it knows about and the one currently
//! selected. Requests that would open a wallet popup go through an [`Approver`].

use std::{fmt, time::Duration};

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::{RpcError, TransportErrorKind},
};
use parking_lot::RwLock;
use reqwest::Url;

use super::{ApprovalRequest, Approver, Confirmation, InjectedProvider, ProviderRpcError};
use crate::{core::network::AddChainParams, utils::color::DebugColor};

/// How often to poll for a receipt while waiting on a transaction.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("invalid rpc endpoint {0:?}")]
    InvalidEndpoint(String),
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
}

#[derive(Clone, Debug)]
struct KnownNetwork {
    chain_id: u64,
    name: String,
    rpc_url: Url,
}

struct ActiveNetwork {
    chain_id: u64,
    provider: DynProvider,
}

pub struct LocalWallet {
    wallet: EthereumWallet,
    address: Address,
    networks: RwLock<Vec<KnownNetwork>>,
    active: RwLock<ActiveNetwork>,
    approver: Box<dyn Approver>,
}

impl LocalWallet {
    /// Opens the wallet on the network served by `endpoint`, which becomes its only known network.
    pub async fn connect(
        signer: PrivateKeySigner,
        endpoint: &str,
        approver: impl Approver + 'static,
    ) -> Result<Self, WalletError> {
        let rpc_url = parse_url(endpoint)?;
        let address = signer.address();
        let wallet = EthereumWallet::new(signer);
        let provider = build_provider(&wallet, rpc_url.clone());
        let chain_id = provider.get_chain_id().await?;
        debug!(@grey, "wallet {} opened on chain {chain_id} via {rpc_url}", address.debug_lavender());

        Ok(Self {
            wallet,
            address,
            networks: RwLock::new(vec![KnownNetwork {
                chain_id,
                name: rpc_url.host_str().unwrap_or("localhost").to_string(),
                rpc_url,
            }]),
            active: RwLock::new(ActiveNetwork { chain_id, provider }),
            approver: Box::new(approver),
        })
    }

    fn active_chain_id(&self) -> u64 {
        self.active.read().chain_id
    }

    fn provider(&self) -> DynProvider {
        self.active.read().provider.clone()
    }

    /// Adds `network`, replacing any entry for the same chain.
    fn register(&self, network: KnownNetwork) {
        debug!(@grey, "wallet registered chain {} ({})", network.chain_id, network.name);
        let mut networks = self.networks.write();
        networks.retain(|n| n.chain_id != network.chain_id);
        networks.push(network);
    }

    fn confirm(&self, request: ApprovalRequest) -> Result<(), ProviderRpcError> {
        if self.approver.approve(&request) {
            Ok(())
        } else {
            Err(ProviderRpcError::user_rejected(request))
        }
    }
}

impl fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address)
            .field("chain_id", &self.active_chain_id())
            .field("networks", &self.networks.read())
            .finish()
    }
}

impl InjectedProvider for LocalWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderRpcError> {
        self.confirm(ApprovalRequest::ConnectAccount {
            address: self.address,
        })?;
        Ok(vec![self.address])
    }

    async fn chain_id(&self) -> Result<u64, ProviderRpcError> {
        Ok(self.active_chain_id())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderRpcError> {
        let from = self.active_chain_id();
        if from == chain_id {
            return Ok(());
        }
        let network = self
            .networks
            .read()
            .iter()
            .find(|n| n.chain_id == chain_id)
            .cloned()
            .ok_or_else(|| ProviderRpcError::unrecognized_chain(chain_id))?;
        self.confirm(ApprovalRequest::SwitchChain {
            from,
            to: chain_id,
            name: network.name.clone(),
        })?;

        let provider = build_provider(&self.wallet, network.rpc_url);
        *self.active.write() = ActiveNetwork { chain_id, provider };
        debug!(@grey, "wallet switched to chain {chain_id}");
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderRpcError> {
        let chain_id = params
            .chain_id()
            .map_err(ProviderRpcError::invalid_params)?;
        let endpoint = params.rpc_url().map_err(ProviderRpcError::invalid_params)?;
        let rpc_url = parse_url(endpoint).map_err(ProviderRpcError::invalid_params)?;
        self.confirm(ApprovalRequest::AddChain {
            chain_id,
            name: params.chain_name.clone(),
            rpc_url: endpoint.to_string(),
        })?;

        // Wallets refuse to add a network whose endpoint serves another chain.
        let reported = build_provider(&self.wallet, rpc_url.clone())
            .get_chain_id()
            .await?;
        if reported != chain_id {
            return Err(ProviderRpcError::invalid_params(format!(
                "rpc endpoint {endpoint} serves chain {reported}, not {chain_id}"
            )));
        }

        self.register(KnownNetwork {
            chain_id,
            name: params.chain_name.clone(),
            rpc_url,
        });
        Ok(())
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderRpcError> {
        let tx = TransactionRequest::default()
            .with_from(self.address)
            .with_to(to)
            .with_input(data);
        Ok(self.provider().call(tx).await?)
    }

    async fn send_transaction(&self, to: Address, data: Bytes) -> Result<TxHash, ProviderRpcError> {
        self.confirm(ApprovalRequest::SendTransaction {
            chain_id: self.active_chain_id(),
            to,
            data: data.clone(),
        })?;
        let tx = TransactionRequest::default()
            .with_from(self.address)
            .with_to(to)
            .with_input(data);
        let pending = self.provider().send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
    ) -> Result<Confirmation, ProviderRpcError> {
        let provider = self.provider();
        loop {
            if let Some(receipt) = provider.get_transaction_receipt(tx_hash).await? {
                return Ok(Confirmation {
                    tx_hash,
                    block_number: receipt.block_number,
                    gas_used: receipt.gas_used,
                    success: receipt.status(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

fn parse_url(endpoint: &str) -> Result<Url, WalletError> {
    endpoint
        .parse()
        .map_err(|_| WalletError::InvalidEndpoint(endpoint.to_string()))
}

fn build_provider(wallet: &EthereumWallet, rpc_url: Url) -> DynProvider {
    ProviderBuilder::new()
        .wallet(wallet.clone())
        .connect_http(rpc_url)
        .erased()
}
