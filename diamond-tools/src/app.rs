// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The dapp's action loop.
//!
//! [`Dapp`] runs one [`Action`] at a time against the current [`Session`] and reports what
//! happened as [`Update`]s on a channel, which a front-end renders. Failures stop at the action
//! boundary: they are logged, sent as [`Update::ActionFailed`], and returned to the caller.

use std::{fmt, sync::Arc};

use alloy::primitives::{Address, TxHash};
use tokio::sync::mpsc;

use crate::{
    core::{
        config::DappConfig,
        provider::InjectedProvider,
        session::{Session, SessionError},
    },
    ops, Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Connect,
    GetValue,
    /// New value as typed by the user.
    SetValue(String),
    Upgrade,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::GetValue => f.write_str("get value"),
            Self::SetValue(value) => write!(f, "set value {value}"),
            Self::Upgrade => f.write_str("upgrade"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// The wallet authorized an account, possibly still on the wrong chain.
    Connected { address: Address, chain_id: u64 },
    /// The session is on the configured network and ready for calls.
    SessionEstablished { address: Address, chain_id: u64 },
    Value(String),
    TransactionConfirmed { action: Action, tx_hash: TxHash },
    ActionFailed { action: Action, error: String },
}

pub struct Dapp<W> {
    injected: Option<Arc<W>>,
    config: DappConfig,
    session: Option<Session<W>>,
    updates: mpsc::UnboundedSender<Update>,
}

impl<W: InjectedProvider> Dapp<W> {
    pub fn new(
        injected: Option<Arc<W>>,
        config: DappConfig,
    ) -> (Self, mpsc::UnboundedReceiver<Update>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let dapp = Self {
            injected,
            config,
            session: None,
            updates,
        };
        (dapp, rx)
    }

    pub fn session(&self) -> Option<&Session<W>> {
        self.session.as_ref()
    }

    /// Runs an action to completion.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(@grey, "action: {action}");
        let result = match &action {
            Action::Connect => self.connect().await,
            Action::GetValue => self.get_value().await,
            Action::SetValue(value) => self.set_value(value).await,
            Action::Upgrade => self.upgrade().await,
        };
        if let Err(err) = &result {
            self.report(action, err);
        }
        result
    }

    async fn connect(&mut self) -> Result<()> {
        let session = Session::connect(self.injected.clone()).await?;
        self.emit(Update::Connected {
            address: session.address(),
            chain_id: session.chain_id(),
        });
        self.session = Some(session.clone());

        let session = session.ensure_network(&self.config.network).await?;
        self.emit(Update::SessionEstablished {
            address: session.address(),
            chain_id: session.chain_id(),
        });
        self.session = Some(session);

        // One read per established session.
        if let Err(err) = self.get_value().await {
            self.report(Action::GetValue, &err);
        }
        Ok(())
    }

    async fn get_value(&mut self) -> Result<()> {
        let session = self.current_session()?;
        let value = ops::get_value(&session, &self.config).await?;
        self.emit(Update::Value(value));
        Ok(())
    }

    async fn set_value(&mut self, value: &str) -> Result<()> {
        let session = self.current_session()?;
        let confirmation = ops::set_value(&session, value, &self.config).await?;
        self.emit(Update::TransactionConfirmed {
            action: Action::SetValue(value.to_string()),
            tx_hash: confirmation.tx_hash,
        });
        if let Err(err) = self.get_value().await {
            self.report(Action::GetValue, &err);
        }
        Ok(())
    }

    async fn upgrade(&mut self) -> Result<()> {
        let session = self.current_session()?;
        let confirmation = ops::upgrade(&session, &self.config).await?;
        self.emit(Update::TransactionConfirmed {
            action: Action::Upgrade,
            tx_hash: confirmation.tx_hash,
        });
        Ok(())
    }

    fn current_session(&self) -> Result<Session<W>> {
        Ok(self.session.clone().ok_or(SessionError::NotConnected)?)
    }

    fn report(&self, action: Action, err: &crate::Error) {
        error!(@red, "{action} failed: {err}");
        self.emit(Update::ActionFailed {
            action,
            error: err.to_string(),
        });
    }

    fn emit(&self, update: Update) {
        if self.updates.send(update).is_err() {
            debug!(@grey, "update dropped, nothing is rendering");
        }
    }
}
