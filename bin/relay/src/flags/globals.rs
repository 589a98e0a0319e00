//! Global arguments for the CLI.

use anyhow::{Context as _, Result};
use clap::Parser;
use relay_cli::LogArgs;
use relay_core::RelayConfig;
use std::path::PathBuf;
use tracing::debug;

/// Global arguments for the CLI.
#[derive(Parser, Default, Clone, Debug)]
pub(crate) struct GlobalArgs {
    /// Logging arguments.
    #[command(flatten)]
    pub(crate) log_args: LogArgs,
    /// Path to a TOML relay configuration. Built-in defaults apply when unset.
    #[arg(long, global = true, env = "RELAY_CONFIG")]
    pub(crate) config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Loads the [`RelayConfig`].
    pub(crate) fn relay_config(&self) -> Result<RelayConfig> {
        let Some(path) = &self.config else {
            return Ok(RelayConfig::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        debug!(target: "relay::cli", ?config, "Loaded relay config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_without_path() {
        assert_eq!(GlobalArgs::default().relay_config().unwrap(), RelayConfig::default());
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relay.toml");
        std::fs::write(&path, "callback-gas-limit = 5\n").unwrap();

        let args = GlobalArgs { config: Some(path), ..Default::default() };
        assert_eq!(args.relay_config().unwrap().callback_gas_limit, 5);
    }

    #[test]
    fn test_config_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relay.toml");
        let args = GlobalArgs { config: Some(path.clone()), ..Default::default() };
        assert!(args.relay_config().unwrap_err().to_string().contains("Failed to read"));

        std::fs::write(&path, "paused = 1\n").unwrap();
        assert!(args.relay_config().unwrap_err().to_string().contains("Failed to parse"));
    }
}
