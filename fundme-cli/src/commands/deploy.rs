// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use fundme_tools::{
    core::{
        artifact::ArtifactStore,
        deployment::{FileStore, RpcDeployer},
        network::NetworkRegistry,
        verification::{EtherscanClient, VerifyPolicy},
    },
    ops,
};

use crate::{
    common_args::{AuthArgs, EtherscanArgs, NetworkArgs, ProviderArgs},
    error::FundMeCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only run when one of these tags selects the fundme step
    #[arg(long, num_args(0..), value_name = "TAGS")]
    tags: Vec<String>,
    /// Directory holding compiled contract artifacts
    #[arg(long, default_value = "artifacts")]
    artifacts_dir: PathBuf,
    /// Directory holding per-network deployment records
    #[arg(long, default_value = "deployments")]
    deployments_dir: PathBuf,
    /// Abort the run when verification fails instead of logging it
    #[arg(long)]
    strict_verify: bool,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    #[command(flatten)]
    etherscan: EtherscanArgs,
}

pub async fn exec(args: Args) -> FundMeCliResult {
    if !selected_by_tags(&args.tags) {
        log::info!("tags {:?} do not select the fundme step, skipping", args.tags);
        return Ok(());
    }

    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let network = args.network.identity(&provider).await?;
    log::info!(
        "deploying FundMe to {} (chain id {})",
        network.name,
        network.chain_id
    );

    let registry = NetworkRegistry::default();
    let mut store = FileStore::new(args.deployments_dir.join(&network.name));
    let deployer = RpcDeployer::new(&provider, ArtifactStore::new(&args.artifacts_dir));

    let verifier = build_verifier(&args.etherscan, &registry, &network)?;
    let policy = if args.strict_verify {
        VerifyPolicy::Strict
    } else {
        VerifyPolicy::BestEffort
    };

    ops::deploy_fund_me(
        &network,
        &registry,
        &deployer,
        verifier.as_ref(),
        &mut store,
        policy,
    )
    .await?;
    Ok(())
}

/// Builds the explorer client only where it could ever be used: on a live
/// chain the registry knows about. Elsewhere the gate skips verification,
/// so a configured credential must not force source files to exist.
fn build_verifier(
    etherscan: &EtherscanArgs,
    registry: &NetworkRegistry,
    network: &fundme_tools::core::network::NetworkIdentity,
) -> eyre::Result<Option<EtherscanClient>> {
    if registry.is_development_chain(&network.name) {
        return Ok(None);
    }
    match registry.config_for(network.chain_id) {
        Ok(config) => etherscan.build_client(&config.explorer_api_url),
        // Feed resolution fails first; verification never runs.
        Err(_) => Ok(None),
    }
}

fn selected_by_tags(filter: &[String]) -> bool {
    filter.is_empty()
        || filter
            .iter()
            .any(|tag| ops::deploy::TAGS.contains(&tag.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_selection() {
        assert!(selected_by_tags(&[]));
        assert!(selected_by_tags(&["all".to_owned()]));
        assert!(selected_by_tags(&["fundme".to_owned()]));
        assert!(selected_by_tags(&["mocks".to_owned(), "fundme".to_owned()]));
        assert!(!selected_by_tags(&["mocks".to_owned()]));
    }
}
