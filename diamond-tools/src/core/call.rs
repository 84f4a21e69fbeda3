// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Sending payloads through a session.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, TxHash};

use crate::{
    core::{
        codec::Payload,
        provider::{Confirmation, InjectedProvider, ProviderRpcError},
        session::Session,
    },
    utils::color::DebugColor,
};

#[derive(Debug, thiserror::Error)]
pub enum TransactError {
    #[error("user rejected the transaction")]
    UserRejected,
    #[error("transaction reverted {}", .tx_hash.debug_red())]
    TransactionReverted { tx_hash: TxHash },
    #[error("{0}")]
    Provider(#[from] ProviderRpcError),
}

/// Read-only call of `payload` against `destination`; returns the raw return data.
pub async fn submit_call<W: InjectedProvider>(
    session: &Session<W>,
    payload: &Payload,
    destination: Address,
) -> Result<Bytes, TransactError> {
    debug!(@grey, "eth_call {destination} {payload}");
    let data = session
        .provider()
        .call(destination, payload.to_bytes())
        .await?;
    debug!(@grey, "returned {data}");
    Ok(data)
}

/// Signs and sends `payload` to `destination` from the session's account.
///
/// The state change is only in effect once [`PendingTransaction::confirm`] returns.
pub async fn submit_transaction<W: InjectedProvider>(
    session: &Session<W>,
    payload: &Payload,
    destination: Address,
) -> Result<PendingTransaction<W>, TransactError> {
    debug!(@grey, "eth_sendTransaction {destination} {payload}");
    let tx_hash = session
        .provider()
        .send_transaction(destination, payload.to_bytes())
        .await
        .map_err(|err| {
            if err.is_user_rejection() {
                TransactError::UserRejected
            } else {
                TransactError::Provider(err)
            }
        })?;
    debug!(@grey, "sent tx: {}", tx_hash.debug_lavender());
    Ok(PendingTransaction {
        tx_hash,
        provider: session.provider_handle(),
    })
}

/// A broadcast transaction that has not been confirmed yet.
#[derive(Debug)]
pub struct PendingTransaction<W> {
    tx_hash: TxHash,
    provider: Arc<W>,
}

impl<W: InjectedProvider> PendingTransaction<W> {
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Waits for the receipt, without a timeout.
    pub async fn confirm(self) -> Result<Confirmation, TransactError> {
        let confirmation = self.provider.wait_for_confirmation(self.tx_hash).await?;
        if !confirmation.success {
            return Err(TransactError::TransactionReverted {
                tx_hash: self.tx_hash,
            });
        }
        debug!(@grey,
            "confirmed tx {} in block {:?}, {} gas used",
            self.tx_hash.debug_lavender(),
            confirmation.block_number,
            confirmation.gas_used
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, U256};

    use super::*;
    use crate::{
        core::codec::{build_read_call, build_write_call},
        utils::testing::{MockProvider, Request},
    };

    const TARGET: Address = address!("a0A708b0484F4080dcD31CEb2E6557e01cB4607f");

    async fn session(provider: MockProvider) -> (Session<MockProvider>, Arc<MockProvider>) {
        let provider = Arc::new(provider);
        let session = Session::connect(Some(provider.clone())).await.unwrap();
        (session, provider)
    }

    #[tokio::test]
    async fn call_returns_raw_bytes() {
        let (session, provider) = session(MockProvider::on_chain(97).returning(U256::from(5))).await;
        let payload = build_read_call("getValue()").unwrap();
        let data = submit_call(&session, &payload, TARGET).await.unwrap();
        assert_eq!(data.len(), 32);
        assert_eq!(data[31], 5);
        assert_eq!(
            provider.requests().last(),
            Some(&Request::Call {
                to: TARGET,
                data: payload.to_bytes()
            })
        );
    }

    #[tokio::test]
    async fn transaction_confirms() {
        let (session, provider) = session(MockProvider::on_chain(97)).await;
        let payload = build_write_call("setValue(uint256)", &["uint256"], &["7"]).unwrap();
        let pending = submit_transaction(&session, &payload, TARGET).await.unwrap();
        let tx_hash = pending.tx_hash();
        let confirmation = pending.confirm().await.unwrap();
        assert_eq!(confirmation.tx_hash, tx_hash);
        assert_eq!(provider.sent(), vec![(TARGET, payload.to_bytes())]);
    }

    #[tokio::test]
    async fn reverted_transaction() {
        let (session, _) = session(MockProvider::on_chain(97).reverting()).await;
        let payload = build_write_call("setValue(uint256)", &["uint256"], &["7"]).unwrap();
        let pending = submit_transaction(&session, &payload, TARGET).await.unwrap();
        let tx_hash = pending.tx_hash();
        let err = pending.confirm().await.unwrap_err();
        assert!(matches!(
            err,
            TransactError::TransactionReverted { tx_hash: hash } if hash == tx_hash
        ));
    }
}
