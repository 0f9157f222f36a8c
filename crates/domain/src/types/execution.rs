//! Batch execution types
//!
//! A batch is one (resource, operation) pair applied to an ordered list of
//! items. Every item yields exactly one envelope carrying its input index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::BridgeError;
use crate::impl_wire_name_conversions;

/// Field values supplied by the host for one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(Map<String, Value>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for FieldValues {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One input item of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionItem {
    pub index: usize,
    #[serde(default)]
    pub field_values: FieldValues,
}

impl ExecutionItem {
    pub fn new(index: usize, field_values: FieldValues) -> Self {
        Self { index, field_values }
    }
}

/// Error half of a failed [`ResultEnvelope`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<&BridgeError> for ErrorDetail {
    fn from(error: &BridgeError) -> Self {
        match error {
            BridgeError::ExternalApi(failure) => Self {
                message: failure.most_specific_message(),
                status: failure.status,
                status_text: failure.status_text.clone(),
                data: failure.data.clone(),
            },
            other => Self { message: other.to_string(), status: None, status_text: None, data: None },
        }
    }
}

/// Outcome of exactly one input item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub index: usize,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ResultEnvelope {
    pub fn ok(index: usize, payload: Value) -> Self {
        Self { index, success: true, payload: Some(payload), error: None }
    }

    pub fn failed(index: usize, error: ErrorDetail) -> Self {
        Self { index, success: false, payload: None, error: Some(error) }
    }
}

/// What the dispatcher does when an item fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// Abort the batch and propagate the first item error.
    #[default]
    FailFast,
    /// Emit an error envelope for the item and carry on.
    Continue,
}

impl_wire_name_conversions!(FailurePolicy {
    FailFast => "failFast",
    Continue => "continue",
});

/// Inbound batch: one resource/operation applied to ordered items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub resource: String,
    pub operation: String,
    /// Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_policy: Option<FailurePolicy>,
    #[serde(default)]
    pub items: Vec<ExecutionItem>,
}

impl BatchRequest {
    pub fn new(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        Self { resource: resource.into(), operation: operation.into(), failure_policy: None, items: Vec::new() }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    /// Append an item indexed after the existing ones.
    #[must_use]
    pub fn with_item(mut self, field_values: FieldValues) -> Self {
        let index = self.items.len();
        self.items.push(ExecutionItem::new(index, field_values));
        self
    }
}

/// Envelopes produced by one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub envelopes: Vec<ResultEnvelope>,
    pub cancelled: bool,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.envelopes.iter().filter(|envelope| envelope.success).count()
    }

    pub fn failed(&self) -> usize {
        self.envelopes.len() - self.succeeded()
    }
}
