//! Declarative field schema
//!
//! Resources, operations and fields are described as plain data so a host
//! can render input forms from them and the assembler can read item values
//! against the same declarations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Selectable value of an [`FieldKind::Enum`] field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    pub name: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl OptionValue {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { name: name.into(), value: value.into(), description: None, action: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Named set of member fields; member keys are scoped to the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub key: String,
    pub display_name: String,
    pub fields: Vec<FieldSpec>,
}

impl FieldGroup {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self { key: key.into(), display_name: display_name.into(), fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }
}

/// Input kind of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
    },
    Boolean,
    DateTime,
    Enum { options: Vec<OptionValue> },
    /// A single optional group, e.g. an entity's details.
    NestedGroup { group: FieldGroup },
    /// An ordered list of groups, e.g. document line items.
    RepeatedGroup { group: FieldGroup },
    /// Free-form bag of optional fields merged into the payload as-is.
    Collection { fields: Vec<FieldSpec> },
}

/// Visibility predicate: field key to the values it must currently hold.
///
/// An empty condition is always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayCondition(BTreeMap<String, Vec<Value>>);

impl DisplayCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn allowed(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Replace the allowed values for `key`.
    #[must_use]
    pub fn restrict<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Add `value` to the allowed values for `key`, keeping existing ones.
    #[must_use]
    pub fn allow(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        let allowed = self.0.entry(key.into()).or_default();
        if !allowed.contains(&value) {
            allowed.push(value);
        }
        self
    }

    /// Every listed key must currently hold one of its allowed values.
    pub fn is_satisfied_by(&self, values: &Map<String, Value>) -> bool {
        self.0.iter().all(|(key, allowed)| {
            values.get(key).is_some_and(|current| allowed.contains(current))
        })
    }
}

/// Declaration of one input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: String,
    pub display_name: String,
    pub kind: FieldKind,
    /// `Null` means no default.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default: Value,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "DisplayCondition::is_empty")]
    pub visible_when: DisplayCondition,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            kind,
            default: Value::Null,
            required: false,
            description: None,
            placeholder: None,
            visible_when: DisplayCondition::new(),
        }
    }

    pub fn string(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(key, display_name, FieldKind::String)
    }

    pub fn number(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(key, display_name, FieldKind::Number { min: None })
    }

    pub fn boolean(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(key, display_name, FieldKind::Boolean)
    }

    pub fn date_time(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(key, display_name, FieldKind::DateTime)
    }

    pub fn options(
        key: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<OptionValue>,
    ) -> Self {
        Self::new(key, display_name, FieldKind::Enum { options })
    }

    pub fn nested(key: impl Into<String>, display_name: impl Into<String>, group: FieldGroup) -> Self {
        Self::new(key, display_name, FieldKind::NestedGroup { group })
    }

    pub fn repeated(
        key: impl Into<String>,
        display_name: impl Into<String>,
        group: FieldGroup,
    ) -> Self {
        Self::new(key, display_name, FieldKind::RepeatedGroup { group })
    }

    pub fn collection(
        key: impl Into<String>,
        display_name: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self::new(key, display_name, FieldKind::Collection { fields })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Lower bound for number fields; ignored for other kinds.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        if let FieldKind::Number { min: bound } = &mut self.kind {
            *bound = Some(min);
        }
        self
    }

    /// Show the field only for the given operation values.
    #[must_use]
    pub fn for_operations(mut self, operations: &[&str]) -> Self {
        self.visible_when = self.visible_when.restrict("operation", operations.iter().copied());
        self
    }

    /// Show the field only while `key` holds one of `values`.
    #[must_use]
    pub fn shown_when<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.visible_when = self.visible_when.restrict(key, values);
        self
    }

    /// Group carried by nested and repeated fields.
    pub fn group(&self) -> Option<&FieldGroup> {
        match &self.kind {
            FieldKind::NestedGroup { group } | FieldKind::RepeatedGroup { group } => Some(group),
            _ => None,
        }
    }

    pub fn has_default(&self) -> bool {
        !self.default.is_null()
    }
}

/// One operation a resource supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub name: String,
    /// Dispatch key, unique within the owning resource.
    pub value: String,
    pub description: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_fields: Vec<FieldSpec>,
}

impl OperationDescriptor {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: description.into(),
            action: action.into(),
            extra_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extra_field(mut self, field: FieldSpec) -> Self {
        self.extra_fields.push(field);
        self
    }
}

/// A Fatture in Cloud resource and everything needed to drive it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Unique key, e.g. `issuedDocument`.
    pub name: String,
    pub display_name: String,
    pub fields: Vec<FieldSpec>,
    pub operations: Vec<OperationDescriptor>,
}

impl ResourceDescriptor {
    pub fn operation(&self, value: &str) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|operation| operation.value == value)
    }

    pub fn operation_values(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|operation| operation.value.as_str())
    }
}
