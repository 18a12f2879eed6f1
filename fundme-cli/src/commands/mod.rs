// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

use crate::error::FundMeCliResult;

mod deploy;
mod verify;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the FundMe contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Verify the recorded FundMe deployment
    #[clap(visible_alias = "v")]
    Verify(verify::Args),
}

pub async fn exec(cmd: Command) -> FundMeCliResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Verify(args) => verify::exec(args).await,
    }
}
