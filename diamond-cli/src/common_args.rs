// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, sync::Arc};

use alloy::{
    primitives::{Address, FixedBytes},
    signers::local::{LocalSigner, PrivateKeySigner},
};
use diamond_tools::core::{
    codec::Selector,
    config::DappConfig,
    contract::{
        ContractConfig, FacetCut, FacetCutAction, DIAMOND_ADDRESS, DIAMOND_INIT_ADDRESS,
        VALUE_FACET_ADDRESS, VALUE_FACET_SELECTORS,
    },
    network::{
        NetworkConfig, BSC_TESTNET_CHAIN_ID, BSC_TESTNET_EXPLORER_URL, BSC_TESTNET_NAME,
        BSC_TESTNET_RPC_URL,
    },
    provider::{AutoApprove, LocalWallet, TerminalPrompt},
};
use eyre::{eyre, Context};

use crate::{constants::DEFAULT_ENDPOINT, utils::decode0x};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long, env = "PRIV_KEY_PATH")]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// The configured signer, or `None` when no key source was given.
    fn build_signer(&self) -> eyre::Result<Option<PrivateKeySigner>> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return Ok(Some(signer_from_hex(key)?));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Ok(Some(signer_from_hex(key)?));
        }

        let Some(keystore) = &self.keystore_path else {
            return Ok(None);
        };
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;
        let signer = LocalSigner::decrypt_keystore(keystore, password.trim())?;
        Ok(Some(signer))
    }
}

fn signer_from_hex(key: impl AsRef<str>) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

#[derive(Debug, clap::Args)]
pub struct WalletArgs {
    /// RPC endpoint of the network the wallet starts on
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Approve every wallet request instead of prompting
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    auth: AuthArgs,
}

impl WalletArgs {
    /// Opens the local wallet. `None` means there is no wallet to connect to.
    pub async fn open(&self) -> eyre::Result<Option<Arc<LocalWallet>>> {
        let Some(signer) = self.auth.build_signer()? else {
            return Ok(None);
        };
        let wallet = if self.yes {
            LocalWallet::connect(signer, &self.endpoint, AutoApprove).await?
        } else {
            LocalWallet::connect(signer, &self.endpoint, TerminalPrompt).await?
        };
        Ok(Some(Arc::new(wallet)))
    }
}

#[derive(Debug, clap::Args)]
pub struct DiamondArgs {
    /// Address of the diamond proxy
    #[arg(long, env = "DIAMOND_ADDRESS", default_value_t = DIAMOND_ADDRESS)]
    diamond: Address,
    /// Contract whose init() runs during the diamond cut
    #[arg(long, env = "DIAMOND_INIT_ADDRESS", default_value_t = DIAMOND_INIT_ADDRESS)]
    init: Address,
    /// Facet added by the diamond cut
    #[arg(long, env = "FACET_ADDRESS", default_value_t = VALUE_FACET_ADDRESS)]
    facet: Address,
    /// Function selectors routed to the facet (defaults to the value facet's)
    #[arg(long, value_delimiter = ',')]
    selectors: Vec<Selector>,
    /// Facet cut action: 0 (add), 1 (replace) or 2 (remove)
    #[arg(long, default_value = "0", value_parser = parse_cut_action)]
    cut_action: FacetCutAction,
    /// Chain id the diamond is deployed on
    #[arg(long, env = "CHAIN_ID", default_value_t = BSC_TESTNET_CHAIN_ID)]
    chain_id: u64,
    /// Network name shown when asking the wallet to add the chain
    #[arg(long, default_value = BSC_TESTNET_NAME)]
    chain_name: String,
    /// RPC endpoint handed to the wallet when adding the chain
    #[arg(long, default_value = BSC_TESTNET_RPC_URL)]
    chain_rpc_url: String,
    /// Block explorer handed to the wallet when adding the chain
    #[arg(long, default_value = BSC_TESTNET_EXPLORER_URL)]
    explorer_url: String,
}

impl DiamondArgs {
    pub fn config(&self) -> DappConfig {
        let selectors = if self.selectors.is_empty() {
            VALUE_FACET_SELECTORS.to_vec()
        } else {
            self.selectors.clone()
        };
        DappConfig {
            network: NetworkConfig {
                chain_id: self.chain_id,
                name: self.chain_name.clone(),
                rpc_url: self.chain_rpc_url.clone(),
                explorer_url: self.explorer_url.clone(),
                ..NetworkConfig::default()
            },
            contract: ContractConfig {
                diamond: self.diamond,
                init: self.init,
                facet_cut: FacetCut {
                    facet_address: self.facet,
                    action: self.cut_action,
                    selectors,
                },
            },
        }
    }
}

fn parse_cut_action(text: &str) -> Result<FacetCutAction, String> {
    let code: u8 = text.parse().map_err(|_| format!("invalid facet cut action {text:?}"))?;
    FacetCutAction::try_from(code).map_err(|code| format!("unknown facet cut action {code}"))
}
