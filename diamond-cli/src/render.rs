// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Prints the dapp's updates as they arrive.

use diamond_tools::{
    app::{Action, Update},
    core::network::{format_chain_id, NetworkConfig},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::utils::style::{GREY, LAVENDER, MINT};

/// Renders updates on a background task until the sending side is dropped.
pub fn spawn(mut rx: mpsc::UnboundedReceiver<Update>, network: NetworkConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(update) = rx.recv().await {
            if let Some(line) = describe(&update, &network) {
                println!("{line}");
            }
        }
    })
}

/// Prints every update already queued, for callers that render between actions.
pub fn flush(rx: &mut mpsc::UnboundedReceiver<Update>, network: &NetworkConfig) {
    for line in pending(rx, network) {
        println!("{line}");
    }
}

fn pending(rx: &mut mpsc::UnboundedReceiver<Update>, network: &NetworkConfig) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(update) = rx.try_recv() {
        lines.extend(describe(&update, network));
    }
    lines
}

fn describe(update: &Update, network: &NetworkConfig) -> Option<String> {
    let line = match update {
        Update::Connected { address, chain_id } => format!(
            "{GREY}connected{GREY:#} {LAVENDER}{address}{LAVENDER:#} {GREY}on chain {}{GREY:#}",
            format_chain_id(*chain_id)
        ),
        Update::SessionEstablished { chain_id, .. } => format!(
            "{GREY}ready on{GREY:#} {} {GREY}({}){GREY:#}",
            network.name,
            format_chain_id(*chain_id)
        ),
        Update::Value(value) => format!("{GREY}current value:{GREY:#} {MINT}{value}{MINT:#}"),
        Update::TransactionConfirmed { action, tx_hash } => format!(
            "{GREY}{} confirmed:{GREY:#} {LAVENDER}{}{LAVENDER:#}",
            label(action),
            network.tx_url(tx_hash)
        ),
        // Already logged by the dapp.
        Update::ActionFailed { .. } => return None,
    };
    Some(line)
}

fn label(action: &Action) -> &'static str {
    match action {
        Action::Connect => "connect",
        Action::GetValue => "read",
        Action::SetValue(_) => "setValue",
        Action::Upgrade => "diamond cut",
    }
}
