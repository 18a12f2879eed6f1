// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("abi encoding error: {0}")]
    AbiEncode(#[from] alloy::dyn_abi::Error),
    #[error("constructor takes {expected} arguments, got {got}")]
    ConstructorArity { expected: usize, got: usize },
    #[error("contract has no constructor but {got} arguments were supplied")]
    UnexpectedArgs { got: usize },
}

/// Compiler output for one contract, in the hardhat artifact format.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode.
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_owned(),
            source,
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    /// CREATE init code: creation bytecode followed by the ABI-encoded
    /// constructor arguments.
    pub fn encode_deploy_data(&self, args: &[DynSolValue]) -> Result<Vec<u8>, ArtifactError> {
        let mut data = self.bytecode.to_vec();
        match self.abi.constructor() {
            Some(constructor) => {
                if constructor.inputs.len() != args.len() {
                    return Err(ArtifactError::ConstructorArity {
                        expected: constructor.inputs.len(),
                        got: args.len(),
                    });
                }
                data.extend(constructor.abi_encode_input_raw(args)?);
            }
            None if args.is_empty() => {}
            None => return Err(ArtifactError::UnexpectedArgs { got: args.len() }),
        }
        Ok(data)
    }
}

/// Loads artifacts by contract name from a build output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        Artifact::load(self.dir.join(format!("{name}.json")))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    const FUND_ME_ARTIFACT: &str = r#"{
        "contractName": "FundMe",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [{ "name": "priceFeed", "type": "address", "internalType": "address" }]
            }
        ],
        "bytecode": "0x600a600c600039600a6000f3"
    }"#;

    const NO_CONSTRUCTOR_ARTIFACT: &str = r#"{
        "contractName": "Trivial",
        "abi": [],
        "bytecode": "0x6000"
    }"#;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact: Artifact = serde_json::from_str(FUND_ME_ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "FundMe");
        assert_eq!(artifact.bytecode.len(), 12);
        assert_eq!(artifact.abi.constructor().unwrap().inputs.len(), 1);
    }

    #[test]
    fn encodes_address_argument() {
        let artifact: Artifact = serde_json::from_str(FUND_ME_ARTIFACT).unwrap();
        let feed = Address::repeat_byte(0x42);
        let data = artifact
            .encode_deploy_data(&[DynSolValue::Address(feed)])
            .unwrap();
        assert_eq!(data.len(), artifact.bytecode.len() + 32);
        assert_eq!(&data[..artifact.bytecode.len()], artifact.bytecode.as_ref());
        assert_eq!(&data[artifact.bytecode.len()..], feed.into_word().as_slice());
    }

    #[test]
    fn rejects_wrong_arity() {
        let artifact: Artifact = serde_json::from_str(FUND_ME_ARTIFACT).unwrap();
        let err = artifact.encode_deploy_data(&[]).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::ConstructorArity {
                expected: 1,
                got: 0
            }
        ));
    }

    #[test]
    fn rejects_args_without_constructor() {
        let artifact: Artifact = serde_json::from_str(NO_CONSTRUCTOR_ARTIFACT).unwrap();
        let err = artifact
            .encode_deploy_data(&[DynSolValue::Address(Address::ZERO)])
            .unwrap_err();
        assert!(matches!(err, ArtifactError::UnexpectedArgs { got: 1 }));

        let data = artifact.encode_deploy_data(&[]).unwrap();
        assert_eq!(data, artifact.bytecode.to_vec());
    }
}
