//! Conversions from external infrastructure errors into domain errors.

use ficbridge_domain::BridgeError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BridgeError);

impl From<InfraError> for BridgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BridgeError> for InfraError {
    fn from(value: BridgeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBridgeError {
    fn into_bridge(self) -> BridgeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BridgeError */
/* -------------------------------------------------------------------------- */

impl IntoBridgeError for HttpError {
    fn into_bridge(self) -> BridgeError {
        if self.is_timeout() {
            return BridgeError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return BridgeError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return BridgeError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return BridgeError::Network(format!("failed to decode HTTP response: {self}"));
        }

        BridgeError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_bridge())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → BridgeError */
/* -------------------------------------------------------------------------- */

impl IntoBridgeError for IoError {
    fn into_bridge(self) -> BridgeError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => BridgeError::Config(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                BridgeError::Config(format!("permission denied: {self}"))
            }
            _ => BridgeError::Internal(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_bridge())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → BridgeError */
/* -------------------------------------------------------------------------- */

impl IntoBridgeError for JsonError {
    fn into_bridge(self) -> BridgeError {
        BridgeError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_bridge())
    }
}

impl IntoBridgeError for TomlError {
    fn into_bridge(self) -> BridgeError {
        BridgeError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_bridge())
    }
}
