// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Tools to deploy and verify the FundMe contract.
//!
//! The FundMe constructor takes the address of an ETH/USD price feed. On a
//! development chain that address comes from a previously deployed mock
//! aggregator; on a live network it comes from the static per-chain registry
//! in [`core::network`]. Everything else in this crate is plumbing around
//! that decision.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
