// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Addresses, signatures and the facet cut of the deployed diamond.

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{address, Address, U256},
};

use super::codec::Selector;

pub const DIAMOND_ADDRESS: Address = address!("a0A708b0484F4080dcD31CEb2E6557e01cB4607f");
pub const DIAMOND_INIT_ADDRESS: Address = address!("624abf031fe8B5a8c49C4cC0AC1317710273Af0A");
pub const VALUE_FACET_ADDRESS: Address = address!("5729698F1a4B1DDEA9dB9B3b067656fDa82701BA");

/// Functions routed to the facet by the upgrade.
pub const VALUE_FACET_SELECTORS: [Selector; 7] = [
    Selector::new([0x70, 0x48, 0x02, 0x75]),
    Selector::new([0x41, 0x85, 0x8c, 0x4b]),
    Selector::new([0x82, 0x04, 0xc3, 0x26]),
    Selector::new([0x24, 0xd7, 0x80, 0x6c]),
    Selector::new([0x17, 0x85, 0xf5, 0x3c]),
    Selector::new([0x83, 0xb8, 0xa5, 0xae]),
    Selector::new([0xad, 0xa8, 0xf9, 0x19]),
];

pub const GET_VALUE_SIGNATURE: &str = "getValue()";
pub const SET_VALUE_SIGNATURE: &str = "setValue(uint256)";
pub const INIT_SIGNATURE: &str = "init()";
pub const DIAMOND_CUT_SIGNATURE: &str = "diamondCut((address,uint8,bytes4[])[],address,bytes)";

/// EIP-2535 `FacetCutAction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum FacetCutAction {
    #[default]
    Add = 0,
    Replace = 1,
    Remove = 2,
}

impl TryFrom<u8> for FacetCutAction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Add),
            1 => Ok(Self::Replace),
            2 => Ok(Self::Remove),
            other => Err(other),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetCut {
    pub facet_address: Address,
    pub action: FacetCutAction,
    pub selectors: Vec<Selector>,
}

impl FacetCut {
    /// The cut as an ABI `(address,uint8,bytes4[])` tuple.
    pub fn to_sol_value(&self) -> DynSolValue {
        DynSolValue::Tuple(vec![
            DynSolValue::Address(self.facet_address),
            DynSolValue::Uint(U256::from(self.action as u8), 8),
            DynSolValue::Array(self.selectors.iter().map(|s| s.to_sol_value()).collect()),
        ])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    /// The diamond proxy all calls are sent to.
    pub diamond: Address,
    /// Contract whose `init()` runs inside the diamond cut.
    pub init: Address,
    pub facet_cut: FacetCut,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            diamond: DIAMOND_ADDRESS,
            init: DIAMOND_INIT_ADDRESS,
            facet_cut: FacetCut {
                facet_address: VALUE_FACET_ADDRESS,
                action: FacetCutAction::Add,
                selectors: VALUE_FACET_SELECTORS.to_vec(),
            },
        }
    }
}
