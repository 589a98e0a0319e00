//! Logging arguments.

use crate::{CliResult, init_tracing_subscriber};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// Logging arguments shared by the relay binaries.
#[derive(Parser, Default, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Verbosity level (0-4): each `-v` raises the level from ERROR up to TRACE.
    #[arg(short = 'v', long = "verbosity", action = ArgAction::Count, global = true)]
    pub v: u8,
    /// Additional filter directives, in `RUST_LOG` syntax.
    #[arg(long = "log-filter", global = true, env = "RELAY_LOG_FILTER")]
    pub filter: Option<String>,
}

impl LogArgs {
    /// Installs the global tracing subscriber.
    pub fn init_tracing(&self) -> CliResult<()> {
        let filter = self.filter.as_deref().map(EnvFilter::try_new).transpose()?;
        init_tracing_subscriber(self.v, filter)
    }
}
