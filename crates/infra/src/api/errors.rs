//! Mapping of non-success API responses

use ficbridge_domain::{ApiFailure, BridgeError};
use reqwest::StatusCode;
use serde_json::Value;

/// Build the domain error for a non-2xx response.
///
/// The body is kept as parsed JSON when it parses, otherwise as the raw
/// text; an empty body is dropped.
pub fn status_error(status: StatusCode, body: &str) -> BridgeError {
    let status_text = status.canonical_reason().map(str::to_string);
    BridgeError::ExternalApi(ApiFailure::from_status(status.as_u16(), status_text, parse_body(body)))
}

/// Response body as JSON; `None` when empty, a JSON string when not JSON.
pub fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }

    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn failure(error: BridgeError) -> ApiFailure {
        match error {
            BridgeError::ExternalApi(failure) => failure,
            other => panic!("expected external API error, got {other:?}"),
        }
    }

    #[test]
    fn keeps_json_body_and_reason() {
        let body = r#"{"error":{"message":"Invalid data","validation_result":{"entity.name":"required"}}}"#;
        let failure = failure(status_error(StatusCode::UNPROCESSABLE_ENTITY, body));

        assert_eq!(failure.status, Some(422));
        assert_eq!(failure.status_text.as_deref(), Some("Unprocessable Entity"));
        assert_eq!(failure.message, "Request failed with status code 422");
        assert_eq!(
            failure.data,
            Some(json!({
                "error": { "message": "Invalid data", "validation_result": { "entity.name": "required" } }
            }))
        );
        assert_eq!(failure.most_specific_message(), r#"{"entity.name":"required"}"#);
    }

    #[test]
    fn plain_text_body_is_kept_as_string() {
        let failure = failure(status_error(StatusCode::BAD_GATEWAY, "upstream unavailable"));

        assert_eq!(failure.data, Some(json!("upstream unavailable")));
        assert_eq!(failure.most_specific_message(), "Request failed with status code 502");
    }

    #[test]
    fn empty_body_is_dropped() {
        let failure = failure(status_error(StatusCode::UNAUTHORIZED, "  "));

        assert_eq!(failure.data, None);
        assert_eq!(failure.status_text.as_deref(), Some("Unauthorized"));
    }
}
