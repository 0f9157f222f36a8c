//! Port interfaces
//!
//! These traits define the boundaries between the dispatcher and the
//! infrastructure that talks to Fatture in Cloud and the host's credential
//! manager.

use async_trait::async_trait;
use ficbridge_domain::{AccessToken, Result};
use serde_json::Value;

use crate::calls::ApiCall;

/// Outbound Fatture in Cloud API
#[async_trait]
pub trait InvoicingApi: Send + Sync {
    /// Perform one call and return the response body.
    ///
    /// # Errors
    ///
    /// Non-success responses are returned as `BridgeError::ExternalApi`,
    /// transport failures as `BridgeError::Network`.
    async fn send(&self, token: &AccessToken, call: ApiCall) -> Result<Value>;
}

/// Host credential manager holding the OAuth2 token data
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Fetch the raw credential bag; normalized by
    /// [`resolve_access_token`](crate::credentials::resolve_access_token).
    async fn fetch(&self) -> Result<Value>;
}
