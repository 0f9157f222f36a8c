//! Client and supplier requests

use ficbridge_domain::constants::CLIENT_INFO_PLACEHOLDER;
use ficbridge_domain::{PartyDraft, Result};
use serde_json::{json, Value};

use super::{list_completion, request_body, unknown_operation, AssemblyContext, FieldReader};
use crate::calls::{ApiCall, CallPlan, Completion};
use crate::resources::{Operation, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Party {
    Client,
    Supplier,
}

impl Party {
    const fn kind(self) -> ResourceKind {
        match self {
            Self::Client => ResourceKind::Client,
            Self::Supplier => ResourceKind::Supplier,
        }
    }

    const fn id_key(self) -> &'static str {
        match self {
            Self::Client => "clientId",
            Self::Supplier => "supplierId",
        }
    }

    const fn name_key(self) -> &'static str {
        match self {
            Self::Client => "clientName",
            Self::Supplier => "supplierName",
        }
    }

    fn create(self, company_id: i64, body: Value) -> ApiCall {
        match self {
            Self::Client => ApiCall::CreateClient { company_id, body },
            Self::Supplier => ApiCall::CreateSupplier { company_id, body },
        }
    }

    fn get(self, company_id: i64, id: i64) -> ApiCall {
        match self {
            Self::Client => ApiCall::GetClient { company_id, client_id: id },
            Self::Supplier => ApiCall::GetSupplier { company_id, supplier_id: id },
        }
    }

    fn list(self, company_id: i64) -> ApiCall {
        match self {
            Self::Client => ApiCall::ListClients { company_id },
            Self::Supplier => ApiCall::ListSuppliers { company_id },
        }
    }

    fn modify(self, company_id: i64, id: i64, body: Value) -> ApiCall {
        match self {
            Self::Client => ApiCall::ModifyClient { company_id, client_id: id, body },
            Self::Supplier => ApiCall::ModifySupplier { company_id, supplier_id: id, body },
        }
    }

    fn delete(self, company_id: i64, id: i64) -> ApiCall {
        match self {
            Self::Client => ApiCall::DeleteClient { company_id, client_id: id },
            Self::Supplier => ApiCall::DeleteSupplier { company_id, supplier_id: id },
        }
    }
}

pub(super) fn plan(
    party: Party,
    op: Operation,
    reader: &FieldReader<'_>,
    ctx: &AssemblyContext,
) -> Result<CallPlan> {
    // No such endpoint in the vendor API; answered locally.
    if party == Party::Client && op == Operation::GetInfo {
        return Ok(CallPlan::local(json!({ "message": CLIENT_INFO_PLACEHOLDER })));
    }

    let company_id = reader.required_integer("companyId")?;

    match op {
        Operation::Create => {
            let body = draft_body(party, reader)?;
            Ok(CallPlan::passthrough(party.create(company_id, body)))
        }
        Operation::Get => {
            let id = reader.required_integer(party.id_key())?;
            Ok(CallPlan::passthrough(party.get(company_id, id)))
        }
        Operation::GetAll => {
            Ok(CallPlan::remote(party.list(company_id), list_completion(reader, ctx)?))
        }
        Operation::Update => {
            let id = reader.required_integer(party.id_key())?;
            let body = draft_body(party, reader)?;
            Ok(CallPlan::passthrough(party.modify(company_id, id, body)))
        }
        Operation::Delete => {
            let id = reader.required_integer(party.id_key())?;
            Ok(CallPlan::remote(party.delete(company_id, id), Completion::Deleted { id }))
        }
        other => Err(unknown_operation(party.kind(), other.as_str())),
    }
}

fn draft_body(party: Party, reader: &FieldReader<'_>) -> Result<Value> {
    let draft = PartyDraft { name: reader.required_string(party.name_key())? };
    request_body(&draft, reader.collection("additionalFields")?)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ficbridge_domain::{BridgeError, FieldValues};

    use super::super::assemble;
    use super::*;

    fn values(raw: Value) -> FieldValues {
        FieldValues::from(raw.as_object().cloned().unwrap_or_default())
    }

    fn ctx() -> AssemblyContext {
        AssemblyContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn create_wraps_name_and_additional_fields() {
        let plan = assemble(
            "client",
            "create",
            &values(json!({
                "companyId": 10,
                "clientName": "Mario Rossi",
                "additionalFields": { "type": "person", "email": "mario@example.com" }
            })),
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            plan.call,
            Some(ApiCall::CreateClient {
                company_id: 10,
                body: json!({
                    "data": { "name": "Mario Rossi", "type": "person", "email": "mario@example.com" }
                }),
            })
        );
    }

    #[test]
    fn update_targets_the_supplier_id() {
        let plan = assemble(
            "supplier",
            "update",
            &values(json!({ "companyId": 1, "supplierId": 99, "supplierName": "Forniture Srl" })),
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            plan.call,
            Some(ApiCall::ModifySupplier {
                company_id: 1,
                supplier_id: 99,
                body: json!({ "data": { "name": "Forniture Srl" } }),
            })
        );
    }

    #[test]
    fn delete_completes_with_synthetic_result() {
        let plan = assemble(
            "client",
            "delete",
            &values(json!({ "companyId": 1, "clientId": 7 })),
            &ctx(),
        )
        .unwrap();

        assert_eq!(plan.call, Some(ApiCall::DeleteClient { company_id: 1, client_id: 7 }));
        assert_eq!(plan.completion, Completion::Deleted { id: 7 });
    }

    #[test]
    fn get_all_carries_truncation() {
        let plan = assemble(
            "supplier",
            "getAll",
            &values(json!({ "companyId": 3, "returnAll": false, "limit": 2 })),
            &ctx(),
        )
        .unwrap();

        assert_eq!(plan.call, Some(ApiCall::ListSuppliers { company_id: 3 }));
        assert_eq!(plan.completion, Completion::Truncate { return_all: false, limit: 2 });
    }

    #[test]
    fn client_get_info_is_local() {
        let plan = assemble("client", "getInfo", &FieldValues::new(), &ctx()).unwrap();

        assert!(plan.call.is_none());
        assert_eq!(
            plan.completion.complete(Value::Null),
            json!({ "message": "Client info endpoint not yet implemented in SDK" })
        );
    }

    #[test]
    fn missing_name_is_a_validation_error() {
        let result = assemble("client", "create", &values(json!({ "companyId": 1 })), &ctx());

        assert!(matches!(result, Err(BridgeError::Validation(_))));
    }
}
