// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type CliResult = Result<(), CliError>;

#[derive(Debug)]
pub struct CliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl From<eyre::Error> for CliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

macro_rules! failure_from {
    ($($err:ty),* $(,)?) => {$(
        impl From<$err> for CliError {
            fn from(err: $err) -> Self {
                eyre::Error::from(err).into()
            }
        }
    )*};
}

failure_from!(
    std::io::Error,
    diamond_tools::Error,
    diamond_tools::core::codec::CodecError,
    diamond_tools::core::provider::WalletError,
);
