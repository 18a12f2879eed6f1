// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! The FundMe deployment step.

use alloy::dyn_abi::DynSolValue;

use crate::{
    core::{
        deployment::{ContractDeployer, DeployedContract, DeploymentConfig, DeploymentStore},
        network::{NetworkIdentity, NetworkRegistry},
        pricefeed::resolve_price_feed,
        verification::{should_verify, SourceVerifier, VerifyPolicy},
    },
    Result,
};

/// Name of the contract deployed by this step.
pub const FUND_ME: &str = "FundMe";

/// Labels this step answers to when a runner filters steps by tag.
pub const TAGS: &[&str] = &["all", "fundme"];

/// Deploys FundMe with the network's ETH/USD feed and optionally verifies
/// the result.
///
/// `verifier` is `Some` exactly when an explorer credential is configured;
/// on development chains verification is always skipped.
pub async fn deploy_fund_me<D, V, S>(
    network: &NetworkIdentity,
    registry: &NetworkRegistry,
    deployer: &D,
    verifier: Option<&V>,
    store: &mut S,
    policy: VerifyPolicy,
) -> Result<DeployedContract>
where
    D: ContractDeployer,
    V: SourceVerifier,
    S: DeploymentStore,
{
    let price_feed = resolve_price_feed(registry, network, store)?;
    debug!(@grey, "using ETH/USD price feed {}", price_feed);

    let args = vec![DynSolValue::Address(price_feed)];
    let config = DeploymentConfig {
        from: None,
        wait_confirmations: network.required_confirmations,
    };
    let record = deployer.deploy(FUND_ME, &args, &config).await?;
    store.save(FUND_ME, &record)?;
    mintln!("{FUND_ME} deployed at {}", record.address);

    if should_verify(registry, network, verifier.is_some()) {
        if let Some(verifier) = verifier {
            match verifier.verify(record.address, &record.constructor_args).await {
                Ok(outcome) => debug!(@grey, "verification outcome: {:?}", outcome),
                Err(err) if policy == VerifyPolicy::BestEffort => {
                    warn!(@yellow, "verification failed: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        }
    } else {
        debug!(@grey, "skipping verification on {}", network.name);
    }

    greyln!("----------------------------------------");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use alloy::primitives::{address, Address, Bytes};

    use super::*;
    use crate::core::{
        deployment::{DeploymentError, MemoryStore},
        network::feeds,
        pricefeed::{PriceFeedError, MOCK_V3_AGGREGATOR},
        verification::{VerificationError, VerificationOutcome},
    };
    use crate::Error;

    const MOCK_FEED: Address = address!("0x1111111111111111111111111111111111111111");
    const DEPLOYED_AT: Address = address!("0x2222222222222222222222222222222222222222");

    #[derive(Default)]
    struct StubDeployer {
        calls: RefCell<Vec<(String, Vec<DynSolValue>, Option<u64>)>>,
    }

    impl ContractDeployer for StubDeployer {
        async fn deploy(
            &self,
            name: &str,
            args: &[DynSolValue],
            config: &DeploymentConfig,
        ) -> Result<DeployedContract, DeploymentError> {
            self.calls
                .borrow_mut()
                .push((name.to_owned(), args.to_vec(), config.wait_confirmations));
            let constructor_args = match args {
                [DynSolValue::Address(feed)] => Bytes::from(feed.into_word().to_vec()),
                _ => Bytes::new(),
            };
            Ok(DeployedContract {
                address: DEPLOYED_AT,
                constructor_args,
                transaction_hash: None,
            })
        }
    }

    #[derive(Default)]
    struct StubVerifier {
        calls: RefCell<Vec<(Address, Bytes)>>,
        fail: bool,
    }

    impl SourceVerifier for StubVerifier {
        async fn verify(
            &self,
            address: Address,
            constructor_args: &Bytes,
        ) -> Result<VerificationOutcome, VerificationError> {
            self.calls
                .borrow_mut()
                .push((address, constructor_args.clone()));
            if self.fail {
                Err(VerificationError::Failed(
                    "Fail - Unable to verify".to_owned(),
                ))
            } else {
                Ok(VerificationOutcome::Verified)
            }
        }
    }

    fn hardhat() -> NetworkIdentity {
        NetworkIdentity {
            name: "hardhat".to_owned(),
            chain_id: 31337,
            required_confirmations: None,
        }
    }

    fn sepolia() -> NetworkIdentity {
        NetworkIdentity {
            name: "sepolia".to_owned(),
            chain_id: 11155111,
            required_confirmations: Some(3),
        }
    }

    fn store_with_mock() -> MemoryStore {
        MemoryStore::new().with_record(
            MOCK_V3_AGGREGATOR,
            DeployedContract {
                address: MOCK_FEED,
                constructor_args: Default::default(),
                transaction_hash: None,
            },
        )
    }

    fn single_feed_arg(deployer: &StubDeployer) -> Address {
        let calls = deployer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (name, args, _) = &calls[0];
        assert_eq!(name, FUND_ME);
        match args.as_slice() {
            [DynSolValue::Address(feed)] => *feed,
            other => panic!("expected a single address argument, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn development_chain_deploys_mock_feed_and_skips_verification() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let verifier = StubVerifier::default();
        let mut store = store_with_mock();

        let record = deploy_fund_me(
            &hardhat(),
            &registry,
            &deployer,
            Some(&verifier),
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap();

        assert_eq!(single_feed_arg(&deployer), MOCK_FEED);
        assert_eq!(record.address, DEPLOYED_AT);
        assert!(verifier.calls.borrow().is_empty());
        assert_eq!(store.get(FUND_ME), Some(record));
    }

    #[tokio::test]
    async fn live_chain_deploys_registered_feed_and_verifies() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let verifier = StubVerifier::default();
        let mut store = MemoryStore::new();

        let record = deploy_fund_me(
            &sepolia(),
            &registry,
            &deployer,
            Some(&verifier),
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap();

        assert_eq!(single_feed_arg(&deployer), feeds::SEPOLIA_ETH_USD);
        let verify_calls = verifier.calls.borrow();
        assert_eq!(verify_calls.len(), 1);
        assert_eq!(
            verify_calls[0],
            (DEPLOYED_AT, record.constructor_args.clone())
        );
    }

    #[tokio::test]
    async fn live_chain_without_credential_skips_verification() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let mut store = MemoryStore::new();

        deploy_fund_me(
            &sepolia(),
            &registry,
            &deployer,
            None::<&StubVerifier>,
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap();

        assert_eq!(single_feed_arg(&deployer), feeds::SEPOLIA_ETH_USD);
    }

    #[tokio::test]
    async fn unregistered_chain_aborts_before_deploying() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let mut store = MemoryStore::new();
        let mainnet = NetworkIdentity {
            name: "mainnet".to_owned(),
            chain_id: 1,
            required_confirmations: None,
        };

        let err = deploy_fund_me(
            &mainnet,
            &registry,
            &deployer,
            None::<&StubVerifier>,
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::PriceFeed(PriceFeedError::NotConfigured(_))
        ));
        assert!(deployer.calls.borrow().is_empty());
        assert!(store.get(FUND_ME).is_none());
    }

    #[tokio::test]
    async fn missing_mock_aborts_before_deploying() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let mut store = MemoryStore::new();

        let err = deploy_fund_me(
            &hardhat(),
            &registry,
            &deployer,
            None::<&StubVerifier>,
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::PriceFeed(PriceFeedError::MockNotDeployed { .. })
        ));
        assert!(deployer.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn network_confirmations_reach_the_deployer() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let mut store = MemoryStore::new();

        deploy_fund_me(
            &sepolia(),
            &registry,
            &deployer,
            None::<&StubVerifier>,
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap();

        assert_eq!(deployer.calls.borrow()[0].2, Some(3));
    }

    #[tokio::test]
    async fn best_effort_policy_tolerates_verification_failure() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let verifier = StubVerifier {
            fail: true,
            ..Default::default()
        };
        let mut store = MemoryStore::new();

        let record = deploy_fund_me(
            &sepolia(),
            &registry,
            &deployer,
            Some(&verifier),
            &mut store,
            VerifyPolicy::BestEffort,
        )
        .await
        .unwrap();

        assert_eq!(verifier.calls.borrow().len(), 1);
        assert_eq!(store.get(FUND_ME), Some(record));
    }

    #[tokio::test]
    async fn strict_policy_propagates_verification_failure() {
        let registry = NetworkRegistry::default();
        let deployer = StubDeployer::default();
        let verifier = StubVerifier {
            fail: true,
            ..Default::default()
        };
        let mut store = MemoryStore::new();

        let err = deploy_fund_me(
            &sepolia(),
            &registry,
            &deployer,
            Some(&verifier),
            &mut store,
            VerifyPolicy::Strict,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Verification(_)));
        // The deployment itself still happened and was recorded.
        assert!(store.get(FUND_ME).is_some());
    }
}
