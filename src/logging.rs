//! Logging setup
//!
//! The library only emits `tracing` events. The binary decides where they go
//! by building a [`LogConfig`] from its flags and calling [`init`] once.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where and how verbosely to log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Log at debug level instead of warnings only
    pub debug: bool,
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Drop everything unless a file is given (full-screen modes own stderr)
    pub require_file: bool,
}

impl LogConfig {
    #[must_use]
    pub fn filter_directive(&self) -> &'static str {
        if self.debug { "tordle=debug" } else { "tordle=warn" }
    }

    /// Whether any subscriber should be installed at all
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.file.is_some() || !self.require_file
    }
}

/// Install the global subscriber described by `config`
///
/// `RUST_LOG` overrides the level chosen by `--debug`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(config: &LogConfig) -> Result<()> {
    if !config.enabled() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
