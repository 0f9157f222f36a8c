//! Outbound call plans
//!
//! The assembler turns one item into a [`CallPlan`]: the API call to make
//! (if any) and the rule that shapes its response into the item's payload.

use ficbridge_domain::{DocumentType, PlanUsageCategory};
use serde_json::{json, Value};

/// One Fatture in Cloud API call, fully parameterized
///
/// `body` values are complete request bodies (`{ "data": ... }`).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    CreateClient { company_id: i64, body: Value },
    GetClient { company_id: i64, client_id: i64 },
    ListClients { company_id: i64 },
    ModifyClient { company_id: i64, client_id: i64, body: Value },
    DeleteClient { company_id: i64, client_id: i64 },

    CreateSupplier { company_id: i64, body: Value },
    GetSupplier { company_id: i64, supplier_id: i64 },
    ListSuppliers { company_id: i64 },
    ModifySupplier { company_id: i64, supplier_id: i64, body: Value },
    DeleteSupplier { company_id: i64, supplier_id: i64 },

    CreateIssuedDocument { company_id: i64, body: Value },
    GetIssuedDocument { company_id: i64, document_id: i64 },
    ListIssuedDocuments { company_id: i64, document_type: DocumentType },
    ModifyIssuedDocument { company_id: i64, document_id: i64, body: Value },
    DeleteIssuedDocument { company_id: i64, document_id: i64 },

    GetCompanyInfo { company_id: i64 },
    GetCompanyPlanUsage { company_id: i64, category: PlanUsageCategory },

    GetUserInfo,
    ListUserCompanies,
}

impl ApiCall {
    /// Stable name for logs, matching the vendor SDK method names.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateClient { .. } => "createClient",
            Self::GetClient { .. } => "getClient",
            Self::ListClients { .. } => "listClients",
            Self::ModifyClient { .. } => "modifyClient",
            Self::DeleteClient { .. } => "deleteClient",
            Self::CreateSupplier { .. } => "createSupplier",
            Self::GetSupplier { .. } => "getSupplier",
            Self::ListSuppliers { .. } => "listSuppliers",
            Self::ModifySupplier { .. } => "modifySupplier",
            Self::DeleteSupplier { .. } => "deleteSupplier",
            Self::CreateIssuedDocument { .. } => "createIssuedDocument",
            Self::GetIssuedDocument { .. } => "getIssuedDocument",
            Self::ListIssuedDocuments { .. } => "listIssuedDocuments",
            Self::ModifyIssuedDocument { .. } => "modifyIssuedDocument",
            Self::DeleteIssuedDocument { .. } => "deleteIssuedDocument",
            Self::GetCompanyInfo { .. } => "getCompanyInfo",
            Self::GetCompanyPlanUsage { .. } => "getCompanyPlanUsage",
            Self::GetUserInfo => "getUserInfo",
            Self::ListUserCompanies => "listUserCompanies",
        }
    }

    /// Request body, for calls that send one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::CreateClient { body, .. }
            | Self::ModifyClient { body, .. }
            | Self::CreateSupplier { body, .. }
            | Self::ModifySupplier { body, .. }
            | Self::CreateIssuedDocument { body, .. }
            | Self::ModifyIssuedDocument { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// How a call's response becomes the item payload
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The response body as returned.
    Passthrough,
    /// The body's `data` array, cut to `limit` entries unless `return_all`.
    Truncate { return_all: bool, limit: usize },
    /// `{ "success": true, "deleted": id }`; the response body is ignored.
    Deleted { id: i64 },
    /// A payload produced without any external call.
    Local(Value),
}

impl Completion {
    /// Shape the response body into the item payload.
    pub fn complete(self, response: Value) -> Value {
        match self {
            Self::Passthrough => response,
            Self::Truncate { return_all, limit } => {
                let mut entries = match response {
                    Value::Object(mut body) => match body.remove("data") {
                        Some(Value::Array(entries)) => entries,
                        _ => Vec::new(),
                    },
                    Value::Array(entries) => entries,
                    _ => Vec::new(),
                };
                if !return_all {
                    entries.truncate(limit);
                }
                Value::Array(entries)
            }
            Self::Deleted { id } => json!({ "success": true, "deleted": id }),
            Self::Local(payload) => payload,
        }
    }
}

/// Assembled work for one item
#[derive(Debug, Clone, PartialEq)]
pub struct CallPlan {
    /// `None` for operations completed locally.
    pub call: Option<ApiCall>,
    pub completion: Completion,
}

impl CallPlan {
    pub fn remote(call: ApiCall, completion: Completion) -> Self {
        Self { call: Some(call), completion }
    }

    pub fn passthrough(call: ApiCall) -> Self {
        Self::remote(call, Completion::Passthrough)
    }

    pub fn local(payload: Value) -> Self {
        Self { call: None, completion: Completion::Local(payload) }
    }
}
