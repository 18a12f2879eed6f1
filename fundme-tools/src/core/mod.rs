// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod deployment;
pub mod network;
pub mod pricefeed;
pub mod verification;
