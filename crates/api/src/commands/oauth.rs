//! OAuth2 settings for the host's credential manager

use ficbridge_domain::constants::{
    OAUTH_AUTHORIZATION_URL, OAUTH_CREDENTIAL_NAME, OAUTH_DOCUMENTATION_URL, OAUTH_GRANT_TYPE,
    OAUTH_SCOPE, OAUTH_TOKEN_URL,
};
use serde::Serialize;

/// Fixed OAuth2 authorization-code settings for Fatture in Cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthSettings {
    pub credential_name: &'static str,
    pub grant_type: &'static str,
    pub authorization_url: &'static str,
    pub access_token_url: &'static str,
    pub scope: &'static str,
    pub documentation_url: &'static str,
}

pub const fn oauth_settings() -> OAuthSettings {
    OAuthSettings {
        credential_name: OAUTH_CREDENTIAL_NAME,
        grant_type: OAUTH_GRANT_TYPE,
        authorization_url: OAUTH_AUTHORIZATION_URL,
        access_token_url: OAUTH_TOKEN_URL,
        scope: OAUTH_SCOPE,
        documentation_url: OAUTH_DOCUMENTATION_URL,
    }
}
