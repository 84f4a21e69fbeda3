// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for talking to a single-value diamond contract through a wallet.
//!
//! - [`core::codec`] builds call payloads by hand and decodes `uint256` return data.
//! - [`core::session`] connects to a wallet and moves it onto the diamond's network.
//! - [`ops`] reads, writes and upgrades the diamond.
//! - [`app`] runs those as user actions and reports the results on a channel.

#[macro_use]
mod macros;

pub mod app;
pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
