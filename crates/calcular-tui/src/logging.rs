//! File-backed tracing setup
//!
//! The interactive screen owns stdout and stderr while raw mode is active, so
//! log lines go to a file or nowhere. Without `--log-file` no subscriber is
//! installed and every tracing macro is a cheap no-op.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{CliError, CliResult};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_DIRECTIVES: &str = "calculador=info";

/// Installs the global subscriber appending to `log_file`, if one was given
///
/// The file is opened in append mode so earlier sessions survive. Honors
/// `RUST_LOG` for per-module filtering. Must be called at most once per
/// process.
pub fn init(log_file: Option<&Path>) -> CliResult<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    Ok(())
}
