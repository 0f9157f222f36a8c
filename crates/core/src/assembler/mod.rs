//! Request assembler
//!
//! Turns one item's field values into a [`CallPlan`]. Everything here is
//! pure: no I/O, and validation failures surface before any network call.

mod dates;
mod issued_document;
mod party;
mod reader;

use chrono::{NaiveDate, Utc};
use ficbridge_domain::constants::DEFAULT_LIST_LIMIT;
use ficbridge_domain::{BridgeError, FieldValues, PlanUsageCategory, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub use dates::{format_date, normalize_date};
pub use reader::FieldReader;

use crate::calls::{ApiCall, CallPlan, Completion};
use crate::registry;
use crate::resources::{Operation, ResourceKind};

/// Values the assembler needs from outside the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyContext {
    /// Date used when a document is created without one.
    pub today: NaiveDate,
    /// List limit applied when the item does not set one.
    pub default_limit: usize,
}

impl AssemblyContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, default_limit: DEFAULT_LIST_LIMIT }
    }

    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}

impl Default for AssemblyContext {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

/// Build the call plan for one item.
///
/// # Errors
///
/// `UnknownResource`/`UnknownOperation` for pairs the registry does not
/// declare, `Validation` for field values that cannot form a request.
pub fn assemble(
    resource: &str,
    operation: &str,
    values: &FieldValues,
    ctx: &AssemblyContext,
) -> Result<CallPlan> {
    let fields = registry::global().fields_for(resource, operation)?;
    let kind = resource
        .parse::<ResourceKind>()
        .map_err(|_| BridgeError::UnknownResource(resource.to_string()))?;
    let op = operation.parse::<Operation>().map_err(|_| unknown_operation(kind, operation))?;

    plan(kind, op, &FieldReader::new(fields, values), ctx)
}

/// Dispatch a validated (resource, operation) pair to its builder.
fn plan(
    kind: ResourceKind,
    op: Operation,
    reader: &FieldReader<'_>,
    ctx: &AssemblyContext,
) -> Result<CallPlan> {
    match kind {
        ResourceKind::Client => party::plan(party::Party::Client, op, reader, ctx),
        ResourceKind::Supplier => party::plan(party::Party::Supplier, op, reader, ctx),
        ResourceKind::IssuedDocument => issued_document::plan(op, reader, ctx),
        ResourceKind::Company => {
            let company_id = reader.required_integer("companyId")?;
            match op {
                Operation::GetInfo => Ok(CallPlan::passthrough(ApiCall::GetCompanyInfo { company_id })),
                Operation::GetPlanUsage => {
                    let category =
                        reader.choice::<PlanUsageCategory>("category")?.unwrap_or_default();
                    Ok(CallPlan::passthrough(ApiCall::GetCompanyPlanUsage { company_id, category }))
                }
                other => Err(unknown_operation(kind, other.as_str())),
            }
        }
        ResourceKind::User => match op {
            Operation::GetInfo => Ok(CallPlan::passthrough(ApiCall::GetUserInfo)),
            Operation::ListCompanies => Ok(CallPlan::passthrough(ApiCall::ListUserCompanies)),
            other => Err(unknown_operation(kind, other.as_str())),
        },
    }
}

fn unknown_operation(kind: ResourceKind, operation: &str) -> BridgeError {
    BridgeError::UnknownOperation { resource: kind.to_string(), operation: operation.to_string() }
}

/// Truncation rule for list operations.
fn list_completion(reader: &FieldReader<'_>, ctx: &AssemblyContext) -> Result<Completion> {
    let return_all = reader.boolean("returnAll")?.unwrap_or(false);
    // `limit` is hidden while `returnAll` is set; whatever it holds is ignored.
    if return_all {
        return Ok(Completion::Truncate { return_all, limit: ctx.default_limit });
    }

    let limit = match reader.supplied("limit")? {
        Some(_) => {
            let limit = reader.required_integer("limit")?;
            usize::try_from(limit)
                .map_err(|_| BridgeError::Validation(format!("Invalid limit: {limit}")))?
        }
        None => ctx.default_limit,
    };

    Ok(Completion::Truncate { return_all, limit })
}

/// Serialize a typed record, merge `additional` over it (last writer wins)
/// and wrap the result as `{ "data": ... }`.
fn request_body<T: Serialize>(record: &T, additional: Map<String, Value>) -> Result<Value> {
    let mut payload = match serde_json::to_value(record) {
        Ok(Value::Object(payload)) => payload,
        Ok(other) => {
            return Err(BridgeError::Internal(format!("Request record is not an object: {other}")))
        }
        Err(err) => return Err(BridgeError::Internal(format!("Failed to serialize request: {err}"))),
    };
    payload.extend(additional);

    Ok(json!({ "data": payload }))
}
