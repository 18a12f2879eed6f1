// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use eyre::eyre;
use fundme_tools::{
    core::{deployment::FileStore, network::NetworkRegistry},
    ops,
};

use crate::{
    common_args::{EtherscanArgs, NetworkArgs, ProviderArgs},
    error::FundMeCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory holding per-network deployment records
    #[arg(long, default_value = "deployments")]
    deployments_dir: PathBuf,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    #[command(flatten)]
    etherscan: EtherscanArgs,
}

pub async fn exec(args: Args) -> FundMeCliResult {
    let provider = args.provider.build_provider().await?;
    let network = args.network.identity(&provider).await?;

    let registry = NetworkRegistry::default();
    if registry.is_development_chain(&network.name) {
        return Err(eyre!("nothing to verify on development chain {}", network.name).into());
    }
    let config = registry
        .config_for(network.chain_id)
        .map_err(fundme_tools::Error::from)?;
    let verifier = args
        .etherscan
        .build_client(&config.explorer_api_url)?
        .ok_or_else(|| eyre!("no explorer API key configured"))?;

    let store = FileStore::new(args.deployments_dir.join(&network.name));
    ops::verify_fund_me(&store, &verifier).await?;
    Ok(())
}
