// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Diamond upgrade.
//!
//! See [EIP-2535](https://eips.ethereum.org/EIPS/eip-2535) for the `diamondCut` interface.

use alloy::dyn_abi::DynSolValue;

use crate::{
    core::{
        call::submit_transaction,
        codec::{build_read_call, signature_types, CallDescriptor, CodecError},
        config::DappConfig,
        contract::{ContractConfig, DIAMOND_CUT_SIGNATURE, INIT_SIGNATURE},
        provider::{Confirmation, InjectedProvider},
        session::Session,
    },
    utils::color::DebugColor,
    Result,
};

/// `diamondCut` applying the configured facet cut, then running `init()` on the init contract.
pub fn diamond_cut_call(contract: &ContractConfig) -> Result<CallDescriptor, CodecError> {
    let init_calldata = build_read_call(INIT_SIGNATURE)?;
    CallDescriptor::new(
        DIAMOND_CUT_SIGNATURE,
        signature_types(DIAMOND_CUT_SIGNATURE)?,
        vec![
            DynSolValue::Array(vec![contract.facet_cut.to_sol_value()]),
            DynSolValue::Address(contract.init),
            DynSolValue::Bytes(init_calldata.as_bytes().to_vec()),
        ],
    )
}

/// Sends the diamond cut and waits for it to be mined.
pub async fn upgrade<W: InjectedProvider>(
    session: &Session<W>,
    config: &DappConfig,
) -> Result<Confirmation> {
    session.require_chain(config.network.chain_id)?;
    let payload = diamond_cut_call(&config.contract)?.encode();
    info!(@grey,
        "cutting facet {} into diamond {}",
        config.contract.facet_cut.facet_address.debug_lavender(),
        config.contract.diamond.debug_lavender()
    );
    let pending = submit_transaction(session, &payload, config.contract.diamond).await?;
    info!(@grey, "diamond cut tx: {}", pending.tx_hash().debug_lavender());
    let confirmation = pending.confirm().await?;
    info!(@grey, "explorer: {}", config.network.tx_url(confirmation.tx_hash));
    Ok(confirmation)
}
