//! Logger bootstrap
//!
//! Logs go to stderr so command output on stdout stays clean. The level comes
//! from `WORDYPOND_LOG` when set, otherwise from the verbosity flag.

use anyhow::anyhow;
use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

/// Environment variable overriding the log specification
pub const LOG_ENV: &str = "WORDYPOND_LOG";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Level used when `WORDYPOND_LOG` is not set
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Start logging once per process. Later calls are no-ops.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let spec = std::env::var(LOG_ENV).unwrap_or_else(|_| default_level(verbose).to_string());
    let handle = Logger::try_with_str(&spec)
        .map_err(|e| anyhow!("invalid log specification `{}`: {}", spec, e))?
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| anyhow!("failed to start logger: {}", e))?;

    // Dropping the handle would stop the logger
    let _ = LOGGER.set(handle);
    log::debug!("logging initialized with `{}`", spec);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false).unwrap();
        assert!(LOGGER.get().is_some());

        init_logging(true).unwrap();
        init_logging(false).unwrap();
        assert!(LOGGER.get().is_some());
    }
}
