// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint the wallet opens on.
pub const DEFAULT_ENDPOINT: &str = diamond_tools::core::network::BSC_TESTNET_RPC_URL;

/// Prompt shown by `diamond console`.
pub const CONSOLE_PROMPT: &str = "diamond> ";
