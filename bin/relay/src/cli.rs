//! Contains the relay CLI.

use crate::{
    commands::{KeysCommand, VerifyCommand},
    flags::GlobalArgs,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use relay_cli::cli_styles;

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Derives the subscription id and publish key of an event.
    Keys(KeysCommand),
    /// Verifies a proof bundle against a trusted header root.
    Verify(VerifyCommand),
}

/// The relay CLI.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, styles = cli_styles(), long_about = None)]
pub(crate) struct Cli {
    /// Global arguments for the CLI.
    #[command(flatten)]
    pub(crate) global: GlobalArgs,
    /// The subcommand to run.
    #[command(subcommand)]
    pub(crate) subcommand: Commands,
}

impl Cli {
    /// Runs the CLI.
    pub(crate) fn run(self) -> Result<()> {
        self.global.log_args.init_tracing()?;

        match self.subcommand {
            Commands::Keys(keys) => keys.run(&self.global),
            Commands::Verify(verify) => verify.run(&self.global),
        }
    }
}
