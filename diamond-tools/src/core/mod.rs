// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod call;
pub mod codec;
pub mod config;
pub mod contract;
pub mod network;
pub mod provider;
pub mod session;
