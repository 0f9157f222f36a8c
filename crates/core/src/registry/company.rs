//! Company descriptor

use ficbridge_domain::{
    FieldSpec, OperationDescriptor, OptionValue, PlanUsageCategory, ResourceDescriptor,
};

use super::fields::company_id;

pub(super) fn descriptor() -> ResourceDescriptor {
    let category = FieldSpec::options(
        "category",
        "Category",
        PlanUsageCategory::ALL
            .iter()
            .map(|category| OptionValue::new(category.display_name(), category.as_str()))
            .collect(),
    )
    .required()
    .with_default(PlanUsageCategory::default().as_str())
    .with_description("The category to get usage information for");

    ResourceDescriptor {
        name: "company".to_string(),
        display_name: "Company".to_string(),
        fields: vec![company_id()],
        operations: vec![
            OperationDescriptor::new(
                "Get Info",
                "getInfo",
                "Get company information",
                "Get company information",
            ),
            OperationDescriptor::new(
                "Get Plan Usage",
                "getPlanUsage",
                "Get company plan usage",
                "Get company plan usage",
            )
            .with_extra_field(category),
        ],
    }
}
