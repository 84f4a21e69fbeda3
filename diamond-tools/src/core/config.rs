// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use super::{contract::ContractConfig, network::NetworkConfig};

/// Everything the dapp needs to know about where the diamond is deployed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DappConfig {
    pub network: NetworkConfig,
    pub contract: ContractConfig,
}
