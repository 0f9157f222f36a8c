//! User descriptor

use ficbridge_domain::{OperationDescriptor, ResourceDescriptor};

pub(super) fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "user".to_string(),
        display_name: "User".to_string(),
        fields: Vec::new(),
        operations: vec![
            OperationDescriptor::new(
                "Get Info",
                "getInfo",
                "Get user information",
                "Get user information",
            ),
            OperationDescriptor::new(
                "List Companies",
                "listCompanies",
                "List user companies",
                "List user companies",
            ),
        ],
    }
}
