// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A scripted wallet provider that records every request it receives.

use alloy::primitives::{address, keccak256, Address, Bytes, TxHash, U256};
use parking_lot::Mutex;

use crate::core::{
    network::AddChainParams,
    provider::{Confirmation, InjectedProvider, ProviderRpcError},
};

pub const ACCOUNT: Address = address!("1111111111111111111111111111111111111111");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    RequestAccounts,
    ChainId,
    SwitchChain(u64),
    AddChain(AddChainParams),
    Call { to: Address, data: Bytes },
    SendTransaction { to: Address, data: Bytes },
    WaitForConfirmation(TxHash),
}

#[derive(Debug)]
struct MockState {
    chain_id: u64,
    known_chains: Vec<u64>,
    requests: Vec<Request>,
}

#[derive(Debug)]
pub struct MockProvider {
    accounts: Vec<Address>,
    reject_accounts: bool,
    reject_switch: bool,
    reject_add: bool,
    fail_add: bool,
    call_result: Bytes,
    tx_success: bool,
    state: Mutex<MockState>,
}

impl MockProvider {
    pub fn on_chain(chain_id: u64) -> Self {
        Self {
            accounts: vec![ACCOUNT],
            reject_accounts: false,
            reject_switch: false,
            reject_add: false,
            fail_add: false,
            call_result: U256::ZERO.to_be_bytes_vec().into(),
            tx_success: true,
            state: Mutex::new(MockState {
                chain_id,
                known_chains: vec![chain_id],
                requests: Vec::new(),
            }),
        }
    }

    pub fn knowing(self, chain_id: u64) -> Self {
        self.state.lock().known_chains.push(chain_id);
        self
    }

    pub fn without_accounts(mut self) -> Self {
        self.accounts.clear();
        self
    }

    pub fn rejecting_accounts(mut self) -> Self {
        self.reject_accounts = true;
        self
    }

    pub fn rejecting_switch(mut self) -> Self {
        self.reject_switch = true;
        self
    }

    pub fn rejecting_add(mut self) -> Self {
        self.reject_add = true;
        self
    }

    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    pub fn returning(mut self, value: U256) -> Self {
        self.call_result = value.to_be_bytes_vec().into();
        self
    }

    pub fn returning_raw(mut self, data: impl Into<Bytes>) -> Self {
        self.call_result = data.into();
        self
    }

    pub fn reverting(mut self) -> Self {
        self.tx_success = false;
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().requests.clone()
    }

    pub fn current_chain(&self) -> u64 {
        self.state.lock().chain_id
    }

    /// Data of every transaction sent so far, with its destination.
    pub fn sent(&self) -> Vec<(Address, Bytes)> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Request::SendTransaction { to, data } => Some((to, data)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, request: Request) {
        self.state.lock().requests.push(request);
    }
}

impl InjectedProvider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderRpcError> {
        self.record(Request::RequestAccounts);
        if self.reject_accounts {
            return Err(ProviderRpcError::user_rejected("eth_requestAccounts"));
        }
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> Result<u64, ProviderRpcError> {
        self.record(Request::ChainId);
        Ok(self.current_chain())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderRpcError> {
        self.record(Request::SwitchChain(chain_id));
        let mut state = self.state.lock();
        if !state.known_chains.contains(&chain_id) {
            return Err(ProviderRpcError::unrecognized_chain(chain_id));
        }
        if self.reject_switch {
            return Err(ProviderRpcError::user_rejected("wallet_switchEthereumChain"));
        }
        state.chain_id = chain_id;
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), ProviderRpcError> {
        self.record(Request::AddChain(params.clone()));
        if self.reject_add {
            return Err(ProviderRpcError::user_rejected("wallet_addEthereumChain"));
        }
        if self.fail_add {
            return Err(ProviderRpcError::internal("rpc endpoint unreachable"));
        }
        let chain_id = params
            .chain_id()
            .map_err(ProviderRpcError::invalid_params)?;
        self.state.lock().known_chains.push(chain_id);
        Ok(())
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderRpcError> {
        self.record(Request::Call { to, data });
        Ok(self.call_result.clone())
    }

    async fn send_transaction(&self, to: Address, data: Bytes) -> Result<TxHash, ProviderRpcError> {
        let tx_hash = keccak256(&data);
        self.record(Request::SendTransaction { to, data });
        Ok(tx_hash)
    }

    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
    ) -> Result<Confirmation, ProviderRpcError> {
        self.record(Request::WaitForConfirmation(tx_hash));
        Ok(Confirmation {
            tx_hash,
            block_number: Some(1),
            gas_used: 21_000,
            success: self.tx_success,
        })
    }
}
