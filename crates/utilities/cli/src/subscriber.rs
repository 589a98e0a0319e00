//! Tracing subscriber setup.

use crate::CliResult;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Installs a global `fmt` subscriber.
///
/// `verbosity` selects the base level: 0 is ERROR, 1 WARN, 2 INFO, 3 DEBUG and anything
/// higher TRACE. Directives from `env_filter`, or from `RUST_LOG` when it is [`None`],
/// are applied on top.
pub fn init_tracing_subscriber(verbosity: u8, env_filter: Option<EnvFilter>) -> CliResult<()> {
    let level = match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = env_filter.unwrap_or_else(EnvFilter::from_default_env).add_directive(level.into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
