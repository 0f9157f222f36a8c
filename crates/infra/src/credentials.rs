//! Credential sources
//!
//! Implementations of the [`CredentialSource`] port. Each returns the raw
//! credential bag; token extraction and the missing-token error belong to
//! the resolver in `ficbridge-core`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ficbridge_core::CredentialSource;
use ficbridge_domain::{BridgeError, Result};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::InfraError;

/// Environment variable read by [`EnvCredentialSource`].
pub const ACCESS_TOKEN_ENV: &str = "FIC_ACCESS_TOKEN";

/// Fixed credential bag, as handed over by an embedding host.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    raw: Value,
}

impl StaticCredentials {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Bag holding a single bearer token.
    pub fn token(token: impl Into<String>) -> Self {
        Self::new(json!({ "access_token": token.into() }))
    }
}

#[async_trait]
impl CredentialSource for StaticCredentials {
    async fn fetch(&self) -> Result<Value> {
        Ok(self.raw.clone())
    }
}

/// Credential bag stored as a JSON file, re-read on every fetch so a token
/// refreshed on disk is picked up by the next batch.
#[derive(Debug, Clone)]
pub struct FileCredentialSource {
    path: PathBuf,
}

impl FileCredentialSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialSource for FileCredentialSource {
    async fn fetch(&self) -> Result<Value> {
        debug!(path = %self.path.display(), "Reading credentials file");

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            BridgeError::Config(format!(
                "Failed to read credentials file {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| BridgeError::from(InfraError::from(e)))
    }
}

/// Bearer token taken from `FIC_ACCESS_TOKEN`.
///
/// An unset or empty variable yields an empty bag, which the resolver
/// reports as a missing token.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialSource;

#[async_trait]
impl CredentialSource for EnvCredentialSource {
    async fn fetch(&self) -> Result<Value> {
        match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(json!({ "access_token": token })),
            _ => Ok(json!({})),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ficbridge_core::resolve_access_token;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::ENV_LOCK;

    #[tokio::test]
    async fn static_token_resolves() {
        let raw = StaticCredentials::token("abc").fetch().await.unwrap();

        assert_eq!(resolve_access_token(&raw).unwrap().expose(), "abc");
    }

    #[tokio::test]
    async fn file_source_reads_host_token_data() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(br#"{ "oauthTokenData": { "access_token": "from-file" } }"#)
            .expect("write credentials");

        let raw = FileCredentialSource::new(file.path()).fetch().await.unwrap();

        assert_eq!(resolve_access_token(&raw).unwrap().expose(), "from-file");
    }

    #[tokio::test]
    async fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = FileCredentialSource::new(dir.path().join("absent.json"));

        assert!(matches!(source.fetch().await, Err(BridgeError::Config(_))));
    }

    #[tokio::test]
    async fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"access_token=abc").expect("write credentials");

        let result = FileCredentialSource::new(file.path()).fetch().await;

        assert!(matches!(result, Err(BridgeError::Config(_))));
    }

    #[tokio::test]
    async fn env_source_reads_token() {
        let raw = {
            let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
            std::env::set_var(ACCESS_TOKEN_ENV, "from-env");
            let raw = EnvCredentialSource.fetch().await;
            std::env::remove_var(ACCESS_TOKEN_ENV);
            raw
        };

        assert_eq!(resolve_access_token(&raw.unwrap()).unwrap().expose(), "from-env");
    }

    #[tokio::test]
    async fn env_source_without_token_is_empty() {
        let raw = {
            let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
            std::env::remove_var(ACCESS_TOKEN_ENV);
            EnvCredentialSource.fetch().await
        };

        assert_eq!(raw.unwrap(), json!({}));
    }
}
