// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! ETH/USD price feed resolution.
//!
//! This is the decision that lets the same deployment flow run on an
//! ephemeral local chain and on a live network without any extra flags: the
//! network's identity alone picks between the mock aggregator deployed
//! earlier in the run and the registered live feed.

use alloy::primitives::Address;

use super::{
    deployment::store::DeploymentStore,
    network::{NetworkError, NetworkIdentity, NetworkRegistry},
};

/// Name under which the mock aggregator step records its deployment.
pub const MOCK_V3_AGGREGATOR: &str = "MockV3Aggregator";

#[derive(Debug, thiserror::Error)]
pub enum PriceFeedError {
    #[error("{0}")]
    NotConfigured(#[from] NetworkError),
    #[error("no {MOCK_V3_AGGREGATOR} deployment found on development chain {chain}")]
    MockNotDeployed { chain: String },
}

/// Resolves the feed address to pass to the FundMe constructor.
///
/// Must succeed before any deploy transaction is sent; both failure cases
/// abort the flow.
pub fn resolve_price_feed(
    registry: &NetworkRegistry,
    network: &NetworkIdentity,
    store: &impl DeploymentStore,
) -> Result<Address, PriceFeedError> {
    if registry.is_development_chain(&network.name) {
        let mock = store
            .get(MOCK_V3_AGGREGATOR)
            .ok_or_else(|| PriceFeedError::MockNotDeployed {
                chain: network.name.clone(),
            })?;
        debug!(@grey, "using mock aggregator at {}", mock.address);
        Ok(mock.address)
    } else {
        Ok(registry.config_for(network.chain_id)?.eth_usd_price_feed)
    }
}
