//! Error types for CLI utilities.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;

/// Errors that can occur in CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] ParseError),

    /// A global tracing subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
