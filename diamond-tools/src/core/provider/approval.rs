// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! User approval of wallet requests.
//!
//! A browser wallet pops up a dialog for each of these requests. The local wallet asks an
//! [`Approver`] instead; declining maps to EIP-1193 error 4001.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use alloy::primitives::{Address, Bytes};
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::core::network::format_chain_id;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApprovalRequest {
    ConnectAccount {
        address: Address,
    },
    SwitchChain {
        from: u64,
        to: u64,
        name: String,
    },
    AddChain {
        chain_id: u64,
        name: String,
        rpc_url: String,
    },
    SendTransaction {
        chain_id: u64,
        to: Address,
        data: Bytes,
    },
}

impl fmt::Display for ApprovalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectAccount { address } => write!(f, "connect account {address}"),
            Self::SwitchChain { from, to, name } => write!(
                f,
                "switch network from {} to {name} ({})",
                format_chain_id(*from),
                format_chain_id(*to)
            ),
            Self::AddChain {
                chain_id,
                name,
                rpc_url,
            } => write!(
                f,
                "add network {name} ({}) via {rpc_url}",
                format_chain_id(*chain_id)
            ),
            Self::SendTransaction { chain_id, to, data } => write!(
                f,
                "send transaction to {to} on chain {} with {} bytes of calldata",
                format_chain_id(*chain_id),
                data.len()
            ),
        }
    }
}

pub trait Approver: Send + Sync {
    fn approve(&self, request: &ApprovalRequest) -> bool;
}

/// Approves everything, for `--yes` and scripted use.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoApprove;

impl Approver for AutoApprove {
    fn approve(&self, request: &ApprovalRequest) -> bool {
        debug!(@grey, "auto-approving: {request}");
        true
    }
}

/// Asks on the terminal, defaulting to no.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompt;

impl Approver for TerminalPrompt {
    fn approve(&self, request: &ApprovalRequest) -> bool {
        eprint!("wallet request: {request}? [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match blocking(|| io::stdin().lock().read_line(&mut answer)) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                egreyln!("could not read answer: {err}");
                false
            }
        }
    }
}

/// Runs blocking io off the async workers when the runtime allows it.
fn blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
