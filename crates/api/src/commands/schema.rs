//! Schema inspection commands

use ficbridge_core::{compile, registry, CompiledField, CompiledSchema};
use ficbridge_domain::{ResourceDescriptor, Result};
use serde::Serialize;
use serde_json::Value;

/// Resource with its operations, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub name: String,
    pub display_name: String,
    pub operations: Vec<OperationSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSummary {
    pub value: String,
    pub name: String,
    pub action: String,
}

impl From<&ResourceDescriptor> for ResourceSummary {
    fn from(resource: &ResourceDescriptor) -> Self {
        Self {
            name: resource.name.clone(),
            display_name: resource.display_name.clone(),
            operations: resource
                .operations
                .iter()
                .map(|operation| OperationSummary {
                    value: operation.value.clone(),
                    name: operation.name.clone(),
                    action: operation.action.clone(),
                })
                .collect(),
        }
    }
}

/// Every resource in registry order.
pub fn list_resources() -> Vec<ResourceSummary> {
    registry::global().list_resources().iter().map(ResourceSummary::from).collect()
}

/// The compiled schema, optionally narrowed to one resource's fields.
///
/// # Errors
/// `BridgeError::UnknownResource` for a resource the registry does not know.
pub fn describe_schema(resource: Option<&str>) -> Result<CompiledSchema> {
    let schema = compile(registry::global());

    let Some(resource) = resource else {
        return Ok(schema);
    };
    registry::global().get(resource)?;

    let wanted = Value::String(resource.to_string());
    let fields: Vec<CompiledField> = schema
        .fields
        .into_iter()
        .filter(|field| {
            field.visible_when.allowed("resource").is_some_and(|allowed| allowed.contains(&wanted))
        })
        .collect();

    Ok(CompiledSchema { fields })
}
