// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Re-verification of an already recorded FundMe deployment.

use crate::{
    core::{
        deployment::DeploymentStore,
        verification::{SourceVerifier, VerificationOutcome},
    },
    ops::deploy::FUND_ME,
    Error, Result,
};

pub async fn verify_fund_me<V, S>(store: &S, verifier: &V) -> Result<VerificationOutcome>
where
    V: SourceVerifier,
    S: DeploymentStore,
{
    let record = store.get(FUND_ME).ok_or_else(|| Error::MissingDeployment {
        name: FUND_ME.to_owned(),
    })?;
    let outcome = verifier.verify(record.address, &record.constructor_args).await?;
    match outcome {
        VerificationOutcome::Verified => greyln!("verification successful"),
        VerificationOutcome::AlreadyVerified => greyln!("contract already verified"),
    }
    Ok(outcome)
}
