// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use diamond_tools::core::codec::decode_uint;

use crate::{error::CliResult, utils::decode0x};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Return data as hex, eg the result of an `eth_call`
    data: String,
}

pub fn exec(args: Args) -> CliResult {
    let data = decode0x(&args.data)?;
    println!("{}", decode_uint(&data)?);
    Ok(())
}
