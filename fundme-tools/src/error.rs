// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    artifact::ArtifactError,
    deployment::{store::StoreError, DeploymentError},
    network::NetworkError,
    pricefeed::PriceFeedError,
    verification::VerificationError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    PriceFeed(#[from] PriceFeedError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Verification(#[from] VerificationError),

    #[error("no {name} deployment recorded for this network")]
    MissingDeployment { name: String },
}
