// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use diamond_tools::app::Action;

use crate::{
    common_args::{DiamondArgs, WalletArgs},
    error::CliResult,
    render,
};

mod calldata;
mod console;
mod decode_uint;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Connect the wallet, move it to the diamond's network and show the current value
    #[clap(visible_alias = "c")]
    Connect(Args),
    /// Show the diamond's current value
    #[clap(visible_alias = "g")]
    GetValue(Args),
    /// Store a new value in the diamond
    #[clap(visible_alias = "s")]
    SetValue(SetValueArgs),
    /// Add the value facet to the diamond with a diamond cut
    #[clap(visible_alias = "u")]
    Upgrade(Args),
    /// Keep one wallet session open and run actions interactively
    Console(Args),
    /// Print the calldata for a function signature and arguments
    Calldata(calldata::Args),
    /// Decode hex return data as a uint256
    DecodeUint(decode_uint::Args),
}

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    wallet: WalletArgs,
    #[command(flatten)]
    diamond: DiamondArgs,
}

#[derive(Debug, clap::Args)]
pub struct SetValueArgs {
    /// New value, in decimal or 0x-prefixed hex
    value: String,

    #[command(flatten)]
    args: Args,
}

impl Command {
    /// Commands that never open a wallet or touch the network.
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Calldata(_) | Self::DecodeUint(_))
    }
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Connect(args) => run(args, None).await,
        // The read after connecting is only a refresh; this one decides the exit code.
        Command::GetValue(args) => run(args, Some(Action::GetValue)).await,
        Command::SetValue(SetValueArgs { value, args }) => {
            run(args, Some(Action::SetValue(value))).await
        }
        Command::Upgrade(args) => run(args, Some(Action::Upgrade)).await,
        Command::Console(args) => console::exec(args).await,
        Command::Calldata(args) => calldata::exec(args),
        Command::DecodeUint(args) => decode_uint::exec(args),
    }
}

/// Connects, then runs `action` on the new session.
async fn run(args: Args, action: Option<Action>) -> CliResult {
    let injected = args.wallet.open().await?;
    let config = args.diamond.config();
    let (mut dapp, rx) = diamond_tools::app::Dapp::new(injected, config.clone());
    let renderer = render::spawn(rx, config.network);

    let mut result = dapp.dispatch(Action::Connect).await;
    if let (true, Some(action)) = (result.is_ok(), action) {
        result = dapp.dispatch(action).await;
    }

    drop(dapp);
    renderer.await.map_err(|err| eyre::eyre!("renderer failed: {err}"))?;
    Ok(result?)
}
