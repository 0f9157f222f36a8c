//! Tracing initialization
//!
//! One subscriber per process, written to stderr so command output on
//! stdout stays machine-readable.

use std::io;

use ficbridge_domain::{BridgeError, LoggingConfig, Result};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the level filter: `RUST_LOG` when set, else the configured level.
///
/// # Errors
/// `BridgeError::Config` when the configured directive does not parse.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        BridgeError::Config(format!("Invalid log level '{}': {e}", config.level))
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
/// `BridgeError::Config` for an invalid level directive,
/// `BridgeError::Internal` when a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).compact().with_writer(io::stderr))
            .try_init()
    };

    installed.map_err(|e| BridgeError::Internal(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {


    use super::*;
    use crate::ENV_LOCK;

    #[test]
    fn rejects_invalid_level_directive() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        let config = LoggingConfig { level: "ficbridge=verbose".into(), json: false };

        assert!(matches!(env_filter(&config), Err(BridgeError::Config(_))));
    }

    #[test]
    fn configured_level_is_used_without_rust_log() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::remove_var("RUST_LOG");

        let filter = env_filter(&LoggingConfig::default()).expect("filter");

        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn second_install_is_reported() {
        let config = LoggingConfig::default();
        let first = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(first.is_ok() || matches!(first, Err(BridgeError::Internal(_))));
        assert!(matches!(second, Err(BridgeError::Internal(_))));
    }
}
