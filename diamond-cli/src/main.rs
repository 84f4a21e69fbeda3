// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `diamond`.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod common_args;
mod constants;
mod error;
mod render;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "diamond")]
#[command(about = "Read, write and upgrade a single-value diamond contract", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let offline = args.command.is_offline();

    let log_level = match (args.verbose, offline) {
        (true, _) => log::Level::Debug,
        // Offline commands print their result to stdout, keep it clean
        (false, true) => log::Level::Warn,
        (false, false) => log::Level::Info,
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Nothing to await when working offline
    let mut runtime = if offline {
        tokio::runtime::Builder::new_current_thread()
    } else {
        tokio::runtime::Builder::new_multi_thread()
    };

    let result = runtime
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(commands::exec(args.command)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
