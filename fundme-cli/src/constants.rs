// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a local development node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// Network name assumed when none is given.
pub const DEFAULT_NETWORK: &str = "localhost";

/// Environment variable holding the explorer API credential.
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
