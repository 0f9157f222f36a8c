//! Typed access to item field values

use std::borrow::Cow;

use ficbridge_domain::{BridgeError, FieldGroup, FieldKind, FieldSpec, FieldValues, Result};
use serde_json::{Map, Value};

/// Reads one item's field values against the fields declared for its
/// (resource, operation) pair.
///
/// Unset values fall back to the field's declared default. Reading a key
/// that is not declared for the pair is an internal error.
pub struct FieldReader<'a> {
    fields: Vec<&'a FieldSpec>,
    values: &'a FieldValues,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: Vec<&'a FieldSpec>, values: &'a FieldValues) -> Self {
        Self { fields, values }
    }

    fn declared(&self, key: &str) -> Result<&'a FieldSpec> {
        self.fields
            .iter()
            .copied()
            .find(|field| field.key == key)
            .ok_or_else(|| BridgeError::Internal(format!("Field '{key}' is not declared for this operation")))
    }

    /// Supplied value, else the declared default, else `None`.
    ///
    /// An explicit `null` counts as unset.
    pub fn value(&self, key: &str) -> Result<Option<&'a Value>> {
        let field = self.declared(key)?;
        let supplied = self.values.get(key).filter(|value| !value.is_null());
        Ok(supplied.or_else(|| field.has_default().then_some(&field.default)))
    }

    /// Value the host supplied, ignoring declared defaults.
    pub fn supplied(&self, key: &str) -> Result<Option<&'a Value>> {
        self.declared(key)?;
        Ok(self.values.get(key).filter(|value| !value.is_null()))
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        self.value(key)?.map(|value| as_string(key, value)).transpose()
    }

    /// # Errors
    ///
    /// `BridgeError::Validation` when the value is missing or blank.
    pub fn required_string(&self, key: &str) -> Result<String> {
        match self.string(key)? {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(missing(key)),
        }
    }

    /// Number value, checked against the field's declared minimum.
    pub fn number(&self, key: &str) -> Result<Option<f64>> {
        let Some(number) = self.value(key)?.map(|value| as_number(key, value)).transpose()? else {
            return Ok(None);
        };

        if let FieldKind::Number { min: Some(min) } = self.declared(key)?.kind {
            if number < min {
                return Err(BridgeError::Validation(format!("Field '{key}' must be at least {min}")));
            }
        }

        Ok(Some(number))
    }

    pub fn integer(&self, key: &str) -> Result<Option<i64>> {
        self.number(key)?.map(|number| to_integer(key, number)).transpose()
    }

    /// # Errors
    ///
    /// `BridgeError::Validation` when the value is missing or fractional.
    pub fn required_integer(&self, key: &str) -> Result<i64> {
        self.integer(key)?.ok_or_else(|| missing(key))
    }

    pub fn boolean(&self, key: &str) -> Result<Option<bool>> {
        self.value(key)?
            .map(|value| match value {
                Value::Bool(flag) => Ok(*flag),
                Value::String(text) if text == "true" => Ok(true),
                Value::String(text) if text == "false" => Ok(false),
                _ => Err(invalid(key, "a boolean")),
            })
            .transpose()
    }

    /// Enum value parsed into its typed form.
    pub fn choice<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.string(key)?
            .map(|raw| {
                raw.parse::<T>().map_err(|_| {
                    BridgeError::Validation(format!("Unsupported value '{raw}' for field '{key}'"))
                })
            })
            .transpose()
    }

    /// Members of a nested group, with member defaults filled in.
    ///
    /// The host sends `{ "<group key>": { ...members } }`; `None` when the
    /// field or its group entry is absent.
    pub fn nested_group(&self, key: &str) -> Result<Option<Map<String, Value>>> {
        let group = self.group(key)?;
        let Some(value) = self.supplied(key)? else {
            return Ok(None);
        };

        unwrap_nested(key, group, value)
    }

    /// Elements of a repeated group, in order, with member defaults filled
    /// in. Unset means empty.
    pub fn repeated_group(&self, key: &str) -> Result<Vec<Map<String, Value>>> {
        let group = self.group(key)?;
        let Some(value) = self.supplied(key)? else {
            return Ok(Vec::new());
        };
        let container = value.as_object().ok_or_else(|| invalid(key, "an object"))?;

        let elements: Cow<'_, [Value]> = match container.get(&group.key) {
            None | Some(Value::Null) => Cow::Owned(Vec::new()),
            Some(Value::Array(elements)) => Cow::Borrowed(elements.as_slice()),
            // A single group instance sent without the list wrapper.
            Some(single @ Value::Object(_)) => Cow::Owned(vec![single.clone()]),
            Some(_) => return Err(invalid(key, "a list of objects")),
        };

        elements
            .iter()
            .map(|element| {
                element
                    .as_object()
                    .map(|members| with_member_defaults(group, members))
                    .ok_or_else(|| invalid(key, "a list of objects"))
            })
            .collect()
    }

    /// Free-form collection entries; unset means empty.
    pub fn collection(&self, key: &str) -> Result<Map<String, Value>> {
        match self.supplied(key)? {
            None => Ok(Map::new()),
            Some(Value::Object(entries)) => Ok(entries.clone()),
            Some(_) => Err(invalid(key, "an object")),
        }
    }

    /// Group declared by a nested or repeated field.
    pub fn group(&self, key: &str) -> Result<&'a FieldGroup> {
        self.declared(key)?
            .group()
            .ok_or_else(|| BridgeError::Internal(format!("Field '{key}' is not a group")))
    }
}

/// Members of a nested group value, or `None` when the group entry is absent.
pub fn unwrap_nested(key: &str, group: &FieldGroup, value: &Value) -> Result<Option<Map<String, Value>>> {
    let container = value.as_object().ok_or_else(|| invalid(key, "an object"))?;

    match container.get(&group.key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(members)) => Ok(Some(with_member_defaults(group, members))),
        Some(_) => Err(invalid(key, "an object")),
    }
}

fn with_member_defaults(group: &FieldGroup, members: &Map<String, Value>) -> Map<String, Value> {
    let mut filled = members.clone();
    for field in group.fields.iter().filter(|field| field.has_default()) {
        if filled.get(&field.key).map_or(true, Value::is_null) {
            filled.insert(field.key.clone(), field.default.clone());
        }
    }
    filled
}

fn as_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(invalid(key, "a string")),
    }
}

fn as_number(key: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) => number.as_f64().ok_or_else(|| invalid(key, "a number")),
        Value::String(text) => text.trim().parse::<f64>().map_err(|_| invalid(key, "a number")),
        _ => Err(invalid(key, "a number")),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_integer(key: &str, number: f64) -> Result<i64> {
    if number.fract() == 0.0 && number.is_finite() {
        Ok(number as i64)
    } else {
        Err(invalid(key, "a whole number"))
    }
}

fn missing(key: &str) -> BridgeError {
    BridgeError::Validation(format!("Field '{key}' is required"))
}

fn invalid(key: &str, expected: &str) -> BridgeError {
    BridgeError::Validation(format!("Field '{key}' must be {expected}"))
}
