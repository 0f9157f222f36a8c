//! Resource registry
//!
//! Static description of every resource the bridge exposes, its fields and
//! its operations. Built once on first use and read-only afterwards.

mod company;
mod fields;
mod issued_document;
mod party;
mod user;

use ficbridge_domain::{BridgeError, FieldSpec, OperationDescriptor, ResourceDescriptor, Result};
use once_cell::sync::Lazy;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

/// Process-wide registry instance.
pub fn global() -> &'static Registry {
    &REGISTRY
}

/// Ordered set of resource descriptors
#[derive(Debug, Clone)]
pub struct Registry {
    resources: Vec<ResourceDescriptor>,
}

impl Registry {
    /// Build the descriptors in declaration order.
    pub fn build() -> Self {
        Self {
            resources: vec![
                party::client(),
                company::descriptor(),
                issued_document::descriptor(),
                party::supplier(),
                user::descriptor(),
            ],
        }
    }

    pub fn list_resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    /// # Errors
    ///
    /// `BridgeError::UnknownResource` when no resource has this name.
    pub fn get(&self, name: &str) -> Result<&ResourceDescriptor> {
        self.resources
            .iter()
            .find(|resource| resource.name == name)
            .ok_or_else(|| BridgeError::UnknownResource(name.to_string()))
    }

    /// # Errors
    ///
    /// `BridgeError::UnknownResource` or `BridgeError::UnknownOperation`.
    pub fn operation(&self, resource: &str, operation: &str) -> Result<&OperationDescriptor> {
        self.get(resource)?.operation(operation).ok_or_else(|| BridgeError::UnknownOperation {
            resource: resource.to_string(),
            operation: operation.to_string(),
        })
    }

    /// Fields declared for a (resource, operation) pair.
    ///
    /// Resource fields restricted to other operations are left out; fields
    /// gated only on sibling values (such as `limit`) are kept. Operation
    /// extra fields follow in declaration order.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::operation`].
    pub fn fields_for(&self, resource: &str, operation: &str) -> Result<Vec<&FieldSpec>> {
        let descriptor = self.get(resource)?;
        let op = self.operation(resource, operation)?;
        let wanted = serde_json::Value::from(operation);

        let resource_fields = descriptor.fields.iter().filter(|field| {
            field.visible_when.allowed("operation").map_or(true, |allowed| allowed.contains(&wanted))
        });

        Ok(resource_fields.chain(op.extra_fields.iter()).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn keys(fields: &[&FieldSpec]) -> Vec<String> {
        fields.iter().map(|field| field.key.clone()).collect()
    }

    #[test]
    fn resources_are_declared_in_order() {
        let names: Vec<&str> =
            global().list_resources().iter().map(|resource| resource.name.as_str()).collect();

        assert_eq!(names, vec!["client", "company", "issuedDocument", "supplier", "user"]);
    }

    #[test]
    fn operation_values_are_unique_per_resource() {
        for resource in global().list_resources() {
            let values: Vec<&str> = resource.operation_values().collect();
            let unique: HashSet<&str> = values.iter().copied().collect();
            assert_eq!(values.len(), unique.len(), "duplicate operation in {}", resource.name);
        }
    }

    #[test]
    fn operations_match_vendor_surface() {
        let operations = |name: &str| -> Vec<String> {
            global().get(name).unwrap().operation_values().map(str::to_string).collect()
        };

        assert_eq!(operations("client"), ["create", "delete", "get", "getInfo", "getAll", "update"]);
        assert_eq!(operations("company"), ["getInfo", "getPlanUsage"]);
        assert_eq!(operations("issuedDocument"), ["create", "delete", "get", "getAll", "update"]);
        assert_eq!(operations("supplier"), ["create", "delete", "get", "getAll", "update"]);
        assert_eq!(operations("user"), ["getInfo", "listCompanies"]);
    }

    #[test]
    fn field_keys_are_unique_per_pair() {
        let registry = global();
        for resource in registry.list_resources() {
            for operation in resource.operation_values() {
                let fields = registry.fields_for(&resource.name, operation).unwrap();
                let unique: HashSet<&str> = fields.iter().map(|field| field.key.as_str()).collect();
                assert_eq!(unique.len(), fields.len(), "{}/{operation}", resource.name);
            }
        }
    }

    #[test]
    fn unknown_lookups_are_reported() {
        let registry = global();

        assert!(matches!(registry.get("product"), Err(BridgeError::UnknownResource(_))));
        assert!(matches!(
            registry.operation("user", "delete"),
            Err(BridgeError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn fields_for_filters_by_operation() {
        let registry = global();

        let get = registry.fields_for("client", "get").unwrap();
        assert_eq!(keys(&get), ["companyId", "clientId"]);

        let list = registry.fields_for("supplier", "getAll").unwrap();
        assert_eq!(keys(&list), ["companyId", "returnAll", "limit"]);

        let usage = registry.fields_for("company", "getPlanUsage").unwrap();
        assert_eq!(keys(&usage), ["companyId", "category"]);

        assert!(registry.fields_for("user", "getInfo").unwrap().is_empty());
    }
}
