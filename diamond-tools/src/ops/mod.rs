// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The dapp's actions against the diamond, built on the codec and a session.

pub use upgrade::{diamond_cut_call, upgrade};
pub use value::{get_value, get_value_call, set_value, set_value_call};

mod upgrade;
mod value;
