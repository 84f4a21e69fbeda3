// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use diamond_tools::core::codec::{build_read_call, CallDescriptor};

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Function signature, eg `setValue(uint256)`
    signature: String,
    /// Arguments, one per parameter
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

pub fn exec(args: Args) -> CliResult {
    let payload = if args.args.is_empty() {
        build_read_call(&args.signature)?
    } else {
        CallDescriptor::from_signature(args.signature, args.args.as_slice())?.encode()
    };
    println!("{payload}");
    Ok(())
}
