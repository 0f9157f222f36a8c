//! Error types used throughout the bridge

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fallback used when neither the response body nor the error carries text.
pub const GENERIC_ERROR_MESSAGE: &str = "Unknown error";

/// Non-success response returned by the Fatture in Cloud API.
///
/// `data` keeps the parsed response body (or the raw text as a JSON string)
/// so callers can surface the server's own diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub message: String,
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub data: Option<Value>,
}

impl ApiFailure {
    /// Build a failure for an HTTP status, mirroring the vendor SDK's generic
    /// "Request failed with status code N" message.
    pub fn from_status(status: u16, status_text: Option<String>, data: Option<Value>) -> Self {
        Self {
            message: format!("Request failed with status code {status}"),
            status: Some(status),
            status_text,
            data,
        }
    }

    /// The most actionable text available for this failure.
    ///
    /// Priority: `error.validation_result`, `error_description`, `message`
    /// from the body, then the failure's own message.
    pub fn most_specific_message(&self) -> String {
        extract_api_message(self.data.as_ref()).unwrap_or_else(|| {
            if self.message.trim().is_empty() {
                GENERIC_ERROR_MESSAGE.to_string()
            } else {
                self.message.clone()
            }
        })
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.most_specific_message())
    }
}

/// Pull the most specific message out of an API error body.
///
/// Falsy values (null, empty strings, `false`, `0`) are skipped the same way
/// the vendor tooling does; structured values such as a validation map are
/// rendered as compact JSON.
pub fn extract_api_message(data: Option<&Value>) -> Option<String> {
    let data = data?;
    let candidates = [
        data.get("error").and_then(|error| error.get("validation_result")),
        data.get("error_description"),
        data.get("message"),
    ];

    candidates.into_iter().flatten().find_map(message_text)
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Main error type for the bridge
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum BridgeError {
    #[error("{0}")]
    MissingToken(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown operation: {operation} (resource: {resource})")]
    UnknownOperation { resource: String, operation: String },

    #[error("{0}")]
    Validation(String),

    #[error("Fatture in Cloud API error: {0}")]
    ExternalApi(ApiFailure),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Stable label suitable for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingToken(_) => "missing_token",
            Self::UnknownResource(_) => "unknown_resource",
            Self::UnknownOperation { .. } => "unknown_operation",
            Self::Validation(_) => "validation",
            Self::ExternalApi(_) => "external_api",
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether re-running the same input unchanged can never succeed.
    ///
    /// Missing credentials need re-authentication, unknown keys and
    /// validation failures need different input.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::MissingToken(_)
                | Self::UnknownResource(_)
                | Self::UnknownOperation { .. }
                | Self::Validation(_)
                | Self::Config(_)
        )
    }

    /// Whether the error was raised before any network call was made.
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Self::MissingToken(_)
                | Self::UnknownResource(_)
                | Self::UnknownOperation { .. }
                | Self::Validation(_)
        )
    }
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn validation_result_wins_over_other_messages() {
        let failure = ApiFailure::from_status(
            422,
            Some("Unprocessable Entity".into()),
            Some(json!({
                "error": { "message": "Invalid data", "validation_result": "name is required" },
                "error_description": "bad request",
                "message": "generic"
            })),
        );

        assert_eq!(failure.most_specific_message(), "name is required");
    }

    #[test]
    fn structured_validation_result_is_rendered_as_json() {
        let failure = ApiFailure::from_status(
            422,
            None,
            Some(json!({ "error": { "validation_result": { "data.entity.name": ["required"] } } })),
        );

        assert_eq!(failure.most_specific_message(), r#"{"data.entity.name":["required"]}"#);
    }

    #[test]
    fn error_description_then_message_then_own_message() {
        let described = ApiFailure::from_status(
            401,
            None,
            Some(json!({ "error_description": "token expired", "message": "nope" })),
        );
        assert_eq!(described.most_specific_message(), "token expired");

        let messaged = ApiFailure::from_status(404, None, Some(json!({ "message": "" , "error_description": null })));
        assert_eq!(messaged.most_specific_message(), "Request failed with status code 404");

        let plain = ApiFailure::from_status(500, None, Some(json!({ "message": "boom" })));
        assert_eq!(plain.most_specific_message(), "boom");
    }

    #[test]
    fn empty_failure_falls_back_to_generic_message() {
        let failure =
            ApiFailure { message: String::new(), status: None, status_text: None, data: None };
        assert_eq!(failure.most_specific_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn external_api_display_uses_specific_message() {
        let err = BridgeError::ExternalApi(ApiFailure::from_status(
            400,
            None,
            Some(json!({ "message": "duplicate number" })),
        ));
        assert_eq!(err.to_string(), "Fatture in Cloud API error: duplicate number");
    }

    #[test]
    fn terminal_and_pre_flight_classification() {
        assert!(BridgeError::MissingToken("x".into()).is_terminal());
        assert!(BridgeError::Validation("x".into()).is_pre_flight());
        assert!(!BridgeError::Network("x".into()).is_terminal());
        let api = BridgeError::ExternalApi(ApiFailure::from_status(500, None, None));
        assert!(!api.is_terminal());
        assert!(!api.is_pre_flight());
        assert_eq!(api.label(), "external_api");
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = BridgeError::UnknownOperation {
            resource: "client".into(),
            operation: "archive".into(),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["type"], "UnknownOperation");
        assert_eq!(value["detail"]["operation"], "archive");
    }
}
