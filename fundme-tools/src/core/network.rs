// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Per-network configuration.
//!
//! Live networks carry a chain-id-keyed entry with the ETH/USD aggregator
//! address; development chains carry no entry at all and are recognized by
//! name instead.

use std::collections::{HashMap, HashSet};

use alloy::primitives::Address;

/// Chains where no live Chainlink aggregator exists and the feed is mocked.
pub const DEV_CHAINS: &[&str] = &["hardhat", "localhost", "anvil"];

/// ETH/USD aggregator addresses on the supported live networks.
pub mod feeds {
    use alloy::primitives::{address, Address};

    pub const SEPOLIA_ETH_USD: Address = address!("0x694AA1769357215DE4FAC081bf1f309aDC325306");
    pub const POLYGON_ETH_USD: Address = address!("0xF9680D99D6C9589e2a93a78A04A279e509205945");
}

/// Identity of the network targeted by the current run.
#[derive(Debug, Clone)]
pub struct NetworkIdentity {
    pub name: String,
    pub chain_id: u64,
    /// Confirmations the network wants on the deploy transaction, if any.
    pub required_confirmations: Option<u64>,
}

/// Static parameters of a single live network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub eth_usd_price_feed: Address,
    /// Explorer verification API endpoint for this chain.
    pub explorer_api_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("no network configuration for chain id {chain_id}")]
    NotConfigured { chain_id: u64 },
}

/// Immutable lookup of per-chain configuration and development-chain names.
///
/// Built once at startup and injected wherever network classification is
/// needed.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    entries: HashMap<u64, NetworkConfig>,
    dev_chains: HashSet<String>,
}

impl NetworkRegistry {
    /// Registry with the standard development-chain names and no entries.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            dev_chains: DEV_CHAINS.iter().map(|name| (*name).to_owned()).collect(),
        }
    }

    pub fn with_entry(mut self, chain_id: u64, config: NetworkConfig) -> Self {
        self.entries.insert(chain_id, config);
        self
    }

    pub fn with_development_chain(mut self, name: impl Into<String>) -> Self {
        self.dev_chains.insert(name.into());
        self
    }

    /// Configuration for a live chain. There is no sensible default feed
    /// address, so an unknown chain id is a hard failure.
    pub fn config_for(&self, chain_id: u64) -> Result<&NetworkConfig, NetworkError> {
        self.entries
            .get(&chain_id)
            .ok_or(NetworkError::NotConfigured { chain_id })
    }

    pub fn is_development_chain(&self, name: &str) -> bool {
        self.dev_chains.contains(name)
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new()
            .with_entry(
                11155111,
                NetworkConfig {
                    eth_usd_price_feed: feeds::SEPOLIA_ETH_USD,
                    explorer_api_url: "https://api-sepolia.etherscan.io/api".to_owned(),
                },
            )
            .with_entry(
                137,
                NetworkConfig {
                    eth_usd_price_feed: feeds::POLYGON_ETH_USD,
                    explorer_api_url: "https://api.polygonscan.com/api".to_owned(),
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_chains_resolve() {
        let registry = NetworkRegistry::default();
        let sepolia = registry.config_for(11155111).unwrap();
        assert_eq!(sepolia.eth_usd_price_feed, feeds::SEPOLIA_ETH_USD);
        let polygon = registry.config_for(137).unwrap();
        assert_eq!(polygon.eth_usd_price_feed, feeds::POLYGON_ETH_USD);
    }

    #[test]
    fn unknown_chain_is_not_configured() {
        let registry = NetworkRegistry::default();
        let err = registry.config_for(1).unwrap_err();
        assert!(matches!(err, NetworkError::NotConfigured { chain_id: 1 }));
    }

    #[test]
    fn development_chain_classification() {
        let registry = NetworkRegistry::default();
        for name in DEV_CHAINS {
            assert!(registry.is_development_chain(name));
        }
        assert!(!registry.is_development_chain("sepolia"));
        assert!(!registry.is_development_chain("mainnet"));
    }

    #[test]
    fn extra_development_chains_can_be_registered() {
        let registry = NetworkRegistry::new().with_development_chain("devnode");
        assert!(registry.is_development_chain("devnode"));
    }
}
