//! Property schema compiler
//!
//! Flattens the registry into the single field list a host renders: a
//! resource selector, one operation selector per resource, then every field
//! with its owning resource (and operation, for extra fields) folded into its
//! visibility predicate.

use std::iter;

use ficbridge_domain::{FieldSpec, OptionValue, ResourceDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::Registry;

/// Resource preselected in the resource selector.
pub const DEFAULT_RESOURCE: &str = "issuedDocument";

/// A field as exposed to the host, visibility fully resolved.
pub type CompiledField = FieldSpec;

/// Flattened, host-facing field list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledSchema {
    pub fields: Vec<CompiledField>,
}

impl CompiledSchema {
    /// Fields visible for the given values, in schema order.
    ///
    /// Unset keys take the default of the first visible field declaring
    /// them, so a bare `{ "resource": "client" }` selects the client's first
    /// operation the same way a host form would.
    pub fn visible_fields(&self, values: &Map<String, Value>) -> Vec<&CompiledField> {
        let mut effective = values.clone();
        let mut visible = Vec::new();

        for field in &self.fields {
            if !field.visible_when.is_satisfied_by(&effective) {
                continue;
            }
            if field.has_default() && !effective.contains_key(&field.key) {
                effective.insert(field.key.clone(), field.default.clone());
            }
            visible.push(field);
        }

        visible
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Compile the registry into a flattened schema.
///
/// Pure: descriptors are cloned, never modified, so compiling twice yields
/// identical output.
pub fn compile(registry: &Registry) -> CompiledSchema {
    let resources = registry.list_resources();

    let fields = iter::once(resource_selector(resources))
        .chain(resources.iter().map(operation_selector))
        .chain(resources.iter().flat_map(scoped_fields))
        .collect();

    CompiledSchema { fields }
}

fn resource_selector(resources: &[ResourceDescriptor]) -> CompiledField {
    let options = resources
        .iter()
        .map(|resource| OptionValue::new(resource.display_name.clone(), resource.name.clone()))
        .collect();

    FieldSpec::options("resource", "Resource", options).required().with_default(DEFAULT_RESOURCE)
}

fn operation_selector(resource: &ResourceDescriptor) -> CompiledField {
    let options = resource
        .operations
        .iter()
        .map(|operation| {
            OptionValue::new(operation.name.clone(), operation.value.clone())
                .with_description(operation.description.clone())
                .with_action(operation.action.clone())
        })
        .collect();

    let selector = FieldSpec::options("operation", "Operation", options).required();
    let selector = match resource.operations.first() {
        Some(first) => selector.with_default(first.value.clone()),
        None => selector,
    };

    selector.shown_when("resource", [resource.name.clone()])
}

fn scoped_fields(resource: &ResourceDescriptor) -> impl Iterator<Item = CompiledField> + '_ {
    let owned = resource.fields.iter().map(move |field| scope_to(field, &resource.name));

    let extras = resource.operations.iter().flat_map(move |operation| {
        operation.extra_fields.iter().map(move |field| {
            let mut field = scope_to(field, &resource.name);
            field.visible_when = field.visible_when.allow("operation", operation.value.clone());
            field
        })
    });

    owned.chain(extras)
}

fn scope_to(field: &FieldSpec, resource: &str) -> CompiledField {
    let mut scoped = field.clone();
    scoped.visible_when = scoped.visible_when.restrict("resource", [resource]);
    scoped
}
