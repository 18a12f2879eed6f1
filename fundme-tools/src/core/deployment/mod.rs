// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Contract deployment through an alloy provider.

use alloy::{
    dyn_abi::DynSolValue,
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use serde::{Deserialize, Serialize};

use super::artifact::{ArtifactError, ArtifactStore};
use crate::utils::color::DebugColor;

pub mod store;

pub use store::{DeploymentStore, FileStore, MemoryStore};

/// Confirmation count used when the network does not specify one.
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// Record of a completed contract deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
    pub address: Address,
    /// ABI-encoded constructor arguments, as submitted in the deploy tx.
    #[serde(default, rename = "constructorArgs")]
    pub constructor_args: Bytes,
    #[serde(
        default,
        rename = "transactionHash",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_hash: Option<TxHash>,
}

#[derive(Debug, Clone, Default)]
pub struct DeploymentConfig {
    /// Sender override; defaults to the wallet's default signer.
    pub from: Option<Address>,
    pub wait_confirmations: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("receipt for {name} deployment carries no contract address")]
    NoContractAddress { name: String },
}

/// A CREATE transaction ready to be sent.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    confirmations: u64,
}

impl DeploymentRequest {
    pub fn new(sender: Address, deploy_code: Vec<u8>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(deploy_code),
            confirmations: DEFAULT_CONFIRMATIONS,
        }
    }

    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = provider.get_gas_price().await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }
}

/// Issues the deployment of a named contract with the given constructor
/// arguments.
///
/// The orchestrator only sees this trait, so the flow can be exercised
/// without an RPC endpoint.
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    async fn deploy(
        &self,
        name: &str,
        args: &[DynSolValue],
        config: &DeploymentConfig,
    ) -> Result<DeployedContract, DeploymentError>;
}

/// Deploys contract artifacts through an alloy provider.
#[derive(Debug)]
pub struct RpcDeployer<'a, P> {
    provider: &'a P,
    artifacts: ArtifactStore,
}

impl<'a, P> RpcDeployer<'a, P> {
    pub fn new(provider: &'a P, artifacts: ArtifactStore) -> Self {
        Self {
            provider,
            artifacts,
        }
    }
}

impl<P: Provider + WalletProvider> ContractDeployer for RpcDeployer<'_, P> {
    async fn deploy(
        &self,
        name: &str,
        args: &[DynSolValue],
        config: &DeploymentConfig,
    ) -> Result<DeployedContract, DeploymentError> {
        let artifact = self.artifacts.load(name)?;
        let deploy_code = artifact.encode_deploy_data(args)?;
        let constructor_args = Bytes::from(deploy_code[artifact.bytecode.len()..].to_vec());

        let from = config
            .from
            .unwrap_or_else(|| self.provider.default_signer_address());
        debug!(@grey, "sender address: {}", from.debug_lavender());

        let confirmations = config.wait_confirmations.unwrap_or(DEFAULT_CONFIRMATIONS);
        let receipt = DeploymentRequest::new(from, deploy_code)
            .with_confirmations(confirmations)
            .exec(self.provider)
            .await?;

        let address = receipt
            .contract_address
            .ok_or_else(|| DeploymentError::NoContractAddress {
                name: name.to_owned(),
            })?;

        Ok(DeployedContract {
            address,
            constructor_args,
            transaction_hash: Some(receipt.transaction_hash),
        })
    }
}
