// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

pub use deploy::deploy_fund_me;
pub use verify::verify_fund_me;

pub mod deploy;
pub mod verify;
