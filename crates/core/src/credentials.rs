//! Access token normalization
//!
//! OAuth2 credentials reach the bridge in whatever shape the host's
//! credential manager stores them. The token is looked up in a fixed order
//! and the first non-empty string wins.

use ficbridge_domain::constants::MISSING_TOKEN_MESSAGE;
use ficbridge_domain::{AccessToken, BridgeError, Result};
use serde_json::Value;

/// Resolve the bearer token from a raw credential bag.
///
/// Checks `oauthTokenData.access_token`, then `access_token`, then
/// `accessToken`.
///
/// # Errors
///
/// Returns `BridgeError::MissingToken` when none of the locations holds a
/// non-empty string.
pub fn resolve_access_token(raw: &Value) -> Result<AccessToken> {
    let candidates = [
        raw.get("oauthTokenData").and_then(|data| data.get("access_token")),
        raw.get("access_token"),
        raw.get("accessToken"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|token| !token.is_empty())
        .map(AccessToken::new)
        .ok_or_else(|| BridgeError::MissingToken(MISSING_TOKEN_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_each_supported_shape() {
        let nested = json!({ "oauthTokenData": { "access_token": "X" } });
        let snake = json!({ "access_token": "Y" });
        let camel = json!({ "accessToken": "Z" });

        assert_eq!(resolve_access_token(&nested).unwrap().expose(), "X");
        assert_eq!(resolve_access_token(&snake).unwrap().expose(), "Y");
        assert_eq!(resolve_access_token(&camel).unwrap().expose(), "Z");
    }

    #[test]
    fn nested_token_takes_precedence() {
        let raw = json!({
            "oauthTokenData": { "access_token": "nested" },
            "access_token": "flat",
            "accessToken": "camel"
        });

        assert_eq!(resolve_access_token(&raw).unwrap().expose(), "nested");
    }

    #[test]
    fn empty_and_non_string_tokens_are_skipped() {
        let raw = json!({
            "oauthTokenData": { "access_token": "" },
            "access_token": 42,
            "accessToken": "camel"
        });

        assert_eq!(resolve_access_token(&raw).unwrap().expose(), "camel");
    }

    #[test]
    fn missing_token_is_reported() {
        let err = resolve_access_token(&json!({})).unwrap_err();

        assert!(matches!(err, BridgeError::MissingToken(_)));
        assert_eq!(err.to_string(), MISSING_TOKEN_MESSAGE);
    }
}
