//! Field declarations shared by several resources

use ficbridge_domain::constants::DEFAULT_LIST_LIMIT;
use ficbridge_domain::{FieldSpec, OperationDescriptor};

pub(super) fn company_id() -> FieldSpec {
    FieldSpec::number("companyId", "Company ID")
        .required()
        .with_default(0)
        .with_description("The company ID for the operation")
}

/// Numeric record identifier used by get, update and delete.
pub(super) fn record_id(key: &str, display_name: &str, noun: &str) -> FieldSpec {
    FieldSpec::number(key, display_name)
        .required()
        .with_default(0)
        .with_description(format!("The ID of the {noun}"))
        .for_operations(&["get", "update", "delete"])
}

pub(super) fn return_all() -> FieldSpec {
    FieldSpec::boolean("returnAll", "Return All")
        .with_default(false)
        .with_description("Whether to return all results or only up to a given limit")
        .for_operations(&["getAll"])
}

pub(super) fn limit() -> FieldSpec {
    FieldSpec::number("limit", "Limit")
        .with_min(1.0)
        .with_default(DEFAULT_LIST_LIMIT)
        .with_description("Max number of results to return")
        .for_operations(&["getAll"])
        .shown_when("returnAll", [false])
}

pub(super) fn text(key: &str, display_name: &str, description: &str) -> FieldSpec {
    FieldSpec::string(key, display_name).with_description(description)
}

/// Create, delete, get, get many and update, in that order.
pub(super) fn crud_operations(noun: &str, plural: &str) -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::new(
            "Create",
            "create",
            format!("Create a new {noun}"),
            format!("Create a {noun}"),
        ),
        OperationDescriptor::new("Delete", "delete", format!("Delete a {noun}"), format!("Delete a {noun}")),
        OperationDescriptor::new("Get", "get", format!("Get a {noun}"), format!("Get a {noun}")),
        OperationDescriptor::new(
            "Get Many",
            "getAll",
            format!("Get many {plural}"),
            format!("Get many {plural}"),
        ),
        OperationDescriptor::new("Update", "update", format!("Update a {noun}"), format!("Update a {noun}")),
    ]
}
