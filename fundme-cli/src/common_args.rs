// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

use std::{env, fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use fundme_tools::core::{
    network::NetworkIdentity,
    verification::{EtherscanClient, SourceSettings},
};

use crate::{
    constants::{DEFAULT_ENDPOINT, DEFAULT_NETWORK, ETHERSCAN_API_KEY_VAR},
    utils::decode0x,
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(decode0x(key)?.as_slice());
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(decode0x(key)?.as_slice());
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the target network
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Name of the target network; decides mock vs. live feed resolution
    #[arg(long, default_value = DEFAULT_NETWORK)]
    pub network: String,
    /// Confirmations to wait for on the deploy transaction
    #[arg(long)]
    pub wait_confirmations: Option<u64>,
}

impl NetworkArgs {
    /// Network identity for this run; the chain id comes from the endpoint,
    /// never from the name.
    pub async fn identity(&self, provider: &impl Provider) -> eyre::Result<NetworkIdentity> {
        let chain_id = provider.get_chain_id().await?;
        Ok(NetworkIdentity {
            name: self.network.clone(),
            chain_id,
            required_confirmations: self.wait_confirmations,
        })
    }
}

#[derive(Debug, clap::Args)]
pub struct EtherscanArgs {
    /// Explorer API key; falls back to the ETHERSCAN_API_KEY environment variable
    #[arg(long)]
    etherscan_api_key: Option<String>,
    /// Flattened source of the deployed contract
    #[arg(long, default_value = "contracts/flat/FundMe.flat.sol")]
    source: PathBuf,
    /// Fully qualified contract name submitted to the explorer
    #[arg(long, default_value = "contracts/FundMe.sol:FundMe")]
    contract_name: String,
    /// solc version string submitted to the explorer
    #[arg(long, default_value = "v0.8.8+commit.dddeac2f")]
    compiler_version: String,
}

impl EtherscanArgs {
    pub fn api_key(&self) -> Option<String> {
        self.etherscan_api_key
            .clone()
            .or_else(|| env::var(ETHERSCAN_API_KEY_VAR).ok())
    }

    /// Builds the explorer client, or `None` when no credential is
    /// configured.
    pub fn build_client(&self, api_url: &str) -> eyre::Result<Option<EtherscanClient>> {
        let Some(api_key) = self.api_key() else {
            return Ok(None);
        };
        let source = fs::read_to_string(&self.source)
            .wrap_err_with(|| format!("could not read contract source {}", self.source.display()))?;
        let settings = SourceSettings {
            contract_name: self.contract_name.clone(),
            source,
            compiler_version: self.compiler_version.clone(),
            optimization_used: false,
            optimizer_runs: 200,
        };
        Ok(Some(EtherscanClient::new(api_url, api_key, settings)))
    }
}
