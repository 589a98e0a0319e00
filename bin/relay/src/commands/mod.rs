//! Contains subcommands for the relay.

mod keys;
pub(crate) use keys::KeysCommand;

mod verify;
pub(crate) use verify::VerifyCommand;

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a JSON document from `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON from '{}'", path.display()))
}
