// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        call::{submit_call, submit_transaction},
        codec::{build_read_call, build_write_call, decode_uint, CodecError, Payload},
        config::DappConfig,
        contract::{GET_VALUE_SIGNATURE, SET_VALUE_SIGNATURE},
        provider::{Confirmation, InjectedProvider},
        session::Session,
    },
    utils::color::{Color, DebugColor},
    Result,
};

pub fn get_value_call() -> Result<Payload, CodecError> {
    build_read_call(GET_VALUE_SIGNATURE)
}

/// `setValue(uint256)` calldata for a value typed as decimal or 0x-hex text.
pub fn set_value_call(value: &str) -> Result<Payload, CodecError> {
    build_write_call(SET_VALUE_SIGNATURE, &["uint256"], &[value.trim()])
}

/// Reads the stored value, rendered in decimal.
pub async fn get_value<W: InjectedProvider>(
    session: &Session<W>,
    config: &DappConfig,
) -> Result<String> {
    session.require_chain(config.network.chain_id)?;
    let data = submit_call(session, &get_value_call()?, config.contract.diamond).await?;
    let value = decode_uint(&data)?;
    debug!(@grey, "getValue() = {}", value.mint());
    Ok(value)
}

/// Stores a new value and waits for the transaction to be mined.
pub async fn set_value<W: InjectedProvider>(
    session: &Session<W>,
    value: &str,
    config: &DappConfig,
) -> Result<Confirmation> {
    session.require_chain(config.network.chain_id)?;
    let payload = set_value_call(value)?;
    let pending = submit_transaction(session, &payload, config.contract.diamond).await?;
    info!(@grey, "setValue tx: {}", pending.tx_hash().debug_lavender());
    let confirmation = pending.confirm().await?;
    info!(@grey, "value set to {}", value.trim().mint());
    Ok(confirmation)
}
