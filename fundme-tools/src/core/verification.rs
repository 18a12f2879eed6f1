// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Source verification against an Etherscan-style explorer API.

use std::time::Duration;

use alloy::primitives::{Address, Bytes};
use serde::Deserialize;

use super::network::{NetworkIdentity, NetworkRegistry};

/// Whether source verification should run for this deployment: live
/// networks only, and only when an explorer credential is configured.
pub fn should_verify(
    registry: &NetworkRegistry,
    network: &NetworkIdentity,
    has_credential: bool,
) -> bool {
    !registry.is_development_chain(&network.name) && has_credential
}

/// What to do when the verification routine itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerifyPolicy {
    /// Log the failure and finish the deployment anyway.
    #[default]
    BestEffort,
    /// Propagate the failure and abort the run.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    /// The explorer already holds matching source for this address.
    AlreadyVerified,
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("verification request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("explorer rejected verification request: {0}")]
    Rejected(String),
    #[error("verification failed: {0}")]
    Failed(String),
    #[error("verification still pending after {attempts} status checks")]
    TimedOut { attempts: usize },
}

/// Submits a deployed address for source verification.
#[allow(async_fn_in_trait)]
pub trait SourceVerifier {
    async fn verify(
        &self,
        address: Address,
        constructor_args: &Bytes,
    ) -> Result<VerificationOutcome, VerificationError>;
}

/// Source settings submitted alongside a verification request.
#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Fully qualified name, e.g. `contracts/FundMe.sol:FundMe`.
    pub contract_name: String,
    /// Flattened Solidity source.
    pub source: String,
    /// Full solc version string, e.g. `v0.8.8+commit.dddeac2f`.
    pub compiler_version: String,
    pub optimization_used: bool,
    pub optimizer_runs: u32,
}

/// Client for the Etherscan-style contract verification API.
///
/// Verification is asynchronous on the explorer side: a submission yields a
/// receipt guid which is then polled until it reaches a terminal state.
#[derive(Debug)]
pub struct EtherscanClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    settings: SourceSettings,
    poll_interval: Duration,
    max_polls: usize,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    result: String,
}

enum SubmitOutcome {
    Pending { guid: String },
    AlreadyVerified,
}

impl EtherscanClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        settings: SourceSettings,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            settings,
            poll_interval: Duration::from_secs(5),
            max_polls: 20,
        }
    }

    async fn submit(
        &self,
        address: Address,
        constructor_args: &Bytes,
    ) -> Result<SubmitOutcome, VerificationError> {
        let optimization_used = if self.settings.optimization_used { "1" } else { "0" };
        // `constructorArguements` is the spelling the API expects.
        let form = [
            ("apikey", self.api_key.clone()),
            ("module", "contract".to_owned()),
            ("action", "verifysourcecode".to_owned()),
            ("contractaddress", address.to_string()),
            ("sourceCode", self.settings.source.clone()),
            ("codeformat", "solidity-single-file".to_owned()),
            ("contractname", self.settings.contract_name.clone()),
            ("compilerversion", self.settings.compiler_version.clone()),
            ("optimizationUsed", optimization_used.to_owned()),
            ("runs", self.settings.optimizer_runs.to_string()),
            ("constructorArguements", hex::encode(constructor_args)),
        ];
        let response: ApiResponse = self
            .http
            .post(&self.api_url)
            .form(&form)
            .send()
            .await?
            .json()
            .await?;

        if response.status == "1" {
            Ok(SubmitOutcome::Pending {
                guid: response.result,
            })
        } else if is_already_verified(&response.result) {
            Ok(SubmitOutcome::AlreadyVerified)
        } else {
            Err(VerificationError::Rejected(response.result))
        }
    }

    async fn poll(&self, guid: &str) -> Result<VerificationOutcome, VerificationError> {
        for _ in 0..self.max_polls {
            tokio::time::sleep(self.poll_interval).await;
            let form = [
                ("apikey", self.api_key.clone()),
                ("module", "contract".to_owned()),
                ("action", "checkverifystatus".to_owned()),
                ("guid", guid.to_owned()),
            ];
            let response: ApiResponse = self
                .http
                .post(&self.api_url)
                .form(&form)
                .send()
                .await?
                .json()
                .await?;
            if let Some(outcome) = classify_status(&response.status, &response.result) {
                return outcome;
            }
            debug!(@grey, "verification pending: {}", response.result);
        }
        Err(VerificationError::TimedOut {
            attempts: self.max_polls,
        })
    }
}

impl SourceVerifier for EtherscanClient {
    async fn verify(
        &self,
        address: Address,
        constructor_args: &Bytes,
    ) -> Result<VerificationOutcome, VerificationError> {
        info!(@grey, "verifying {} via {}", address, self.api_url);
        match self.submit(address, constructor_args).await? {
            SubmitOutcome::AlreadyVerified => Ok(VerificationOutcome::AlreadyVerified),
            SubmitOutcome::Pending { guid } => self.poll(&guid).await,
        }
    }
}

fn is_already_verified(result: &str) -> bool {
    result.to_ascii_lowercase().contains("already verified")
}

/// Terminal outcome for a pending verification guid, or `None` while the
/// explorer still reports it queued.
fn classify_status(
    status: &str,
    result: &str,
) -> Option<Result<VerificationOutcome, VerificationError>> {
    if result.contains("Pending") {
        return None;
    }
    if status == "1" {
        return Some(Ok(VerificationOutcome::Verified));
    }
    if is_already_verified(result) {
        return Some(Ok(VerificationOutcome::AlreadyVerified));
    }
    Some(Err(VerificationError::Failed(result.to_owned())))
}
