//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use ficbridge_core::{CredentialSource, Dispatcher, InvoicingApi};
use ficbridge_domain::{Config, Result};
use ficbridge_infra::{config, FicApiClient};

const BASE_URL_ENV: &str = "FIC_API_BASE_URL";

/// Application context - holds configuration and the wired API client
pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn InvoicingApi>,
}

/// Resolve the configuration for this process.
///
/// An explicit file must load. Without one, environment variables win, then
/// a probed config file; with neither present the built-in defaults apply.
pub fn resolve_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return config::load_from_file(Some(path));
    }

    if std::env::var_os(BASE_URL_ENV).is_none() && config::probe_config_paths().is_none() {
        tracing::debug!("no configuration found, using defaults");
        return Ok(Config::default());
    }

    config::load()
}

impl AppContext {
    /// Create a new application context with custom configuration
    pub fn new_with_config(config: Config) -> Result<Self> {
        let api = FicApiClient::from_config(&config.api)?;
        tracing::debug!(base_url = %api.base_url(), "API client configured");

        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Context around an existing API implementation.
    pub fn with_api(config: Config, api: Arc<dyn InvoicingApi>) -> Self {
        Self { config, api }
    }

    /// Dispatcher carrying the configured execution defaults.
    pub fn dispatcher(&self, credentials: Arc<dyn CredentialSource>) -> Dispatcher {
        Dispatcher::new(Arc::clone(&self.api), credentials)
            .with_default_policy(self.config.execution.failure_policy)
            .with_default_limit(self.config.execution.default_limit)
    }
}
