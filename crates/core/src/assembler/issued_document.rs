//! Issued document requests
//!
//! Form values arrive in the host's grouped shape (`entity.entityDetails`,
//! `itemsList.item[]` with `vat.vatDetails`, `paymentsList.payment[]` with
//! `payment_terms.termsDetails`) and are flattened into the vendor's
//! document body.

use ficbridge_domain::constants::LIST_DOCUMENT_TYPE;
use ficbridge_domain::{
    BridgeError, DocumentItem, DocumentType, Entity, FieldGroup, FieldSpec, IssuedDocumentDraft,
    Payment, PaymentTerms, Result, Vat,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::reader::unwrap_nested;
use super::{
    format_date, list_completion, normalize_date, request_body, unknown_operation,
    AssemblyContext, FieldReader,
};
use crate::calls::{ApiCall, CallPlan, Completion};
use crate::resources::{Operation, ResourceKind};

const PAYMENT_DATE_KEYS: &[&str] = &["due_date", "paid_date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

impl Mode {
    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

pub(super) fn plan(op: Operation, reader: &FieldReader<'_>, ctx: &AssemblyContext) -> Result<CallPlan> {
    let company_id = reader.required_integer("companyId")?;

    match op {
        Operation::Create => {
            let body = draft_body(Mode::Create, reader, ctx)?;
            Ok(CallPlan::passthrough(ApiCall::CreateIssuedDocument { company_id, body }))
        }
        Operation::Get => {
            let document_id = reader.required_integer("documentId")?;
            Ok(CallPlan::passthrough(ApiCall::GetIssuedDocument { company_id, document_id }))
        }
        Operation::GetAll => Ok(CallPlan::remote(
            ApiCall::ListIssuedDocuments { company_id, document_type: LIST_DOCUMENT_TYPE },
            list_completion(reader, ctx)?,
        )),
        Operation::Update => {
            let document_id = reader.required_integer("documentId")?;
            let body = draft_body(Mode::Update, reader, ctx)?;
            Ok(CallPlan::passthrough(ApiCall::ModifyIssuedDocument { company_id, document_id, body }))
        }
        Operation::Delete => {
            let document_id = reader.required_integer("documentId")?;
            Ok(CallPlan::remote(
                ApiCall::DeleteIssuedDocument { company_id, document_id },
                Completion::Deleted { id: document_id },
            ))
        }
        other => Err(unknown_operation(ResourceKind::IssuedDocument, other.as_str())),
    }
}

fn draft_body(mode: Mode, reader: &FieldReader<'_>, ctx: &AssemblyContext) -> Result<Value> {
    let entity = entity(mode, reader)?;

    let date = match reader.string("date")?.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => Some(normalize_date("date", &raw)?),
        None if mode == Mode::Create => Some(format_date(ctx.today)),
        None => None,
    };

    let document_type = match mode {
        Mode::Create => Some(reader.choice::<DocumentType>("documentType")?.unwrap_or_default()),
        Mode::Update => None,
    };

    let draft = IssuedDocumentDraft {
        document_type,
        entity,
        date,
        number: reader.integer("number")?,
        subject: reader.string("subject")?.unwrap_or_default(),
        items_list: items(reader)?,
        payments_list: payments(reader)?,
    };

    request_body(&draft, reader.collection("additionalFields")?)
}

fn entity(mode: Mode, reader: &FieldReader<'_>) -> Result<Entity> {
    let entity = match reader.nested_group("entity")? {
        Some(members) => record::<Entity>("entity", members)?,
        None => Entity::default(),
    };

    if entity.has_name() {
        Ok(entity)
    } else {
        Err(BridgeError::Validation(format!(
            "Entity (Client) name is required to {} an issued document. Please fill in the \
             client name in the Entity section.",
            mode.verb()
        )))
    }
}

fn items(reader: &FieldReader<'_>) -> Result<Vec<DocumentItem>> {
    let vat_group = member_group(reader, "itemsList", "vat")?;

    reader
        .repeated_group("itemsList")?
        .into_iter()
        .map(|mut members| {
            let vat = match members.remove("vat") {
                Some(value) => match unwrap_nested("vat", vat_group, &value)? {
                    Some(details) => record::<Vat>("vat", details)?,
                    None => Vat::default(),
                },
                None => Vat::default(),
            };
            members.insert("vat".to_string(), to_member(&vat)?);
            record::<DocumentItem>("itemsList", members)
        })
        .collect()
}

fn payments(reader: &FieldReader<'_>) -> Result<Vec<Payment>> {
    let terms_group = member_group(reader, "paymentsList", "payment_terms")?;

    reader
        .repeated_group("paymentsList")?
        .into_iter()
        .map(|mut members| {
            let terms = match members.remove("payment_terms") {
                Some(value) => match unwrap_nested("payment_terms", terms_group, &value)? {
                    Some(details) => record::<PaymentTerms>("payment_terms", details)?,
                    None => PaymentTerms::default(),
                },
                None => PaymentTerms::default(),
            };
            members.insert("payment_terms".to_string(), to_member(&terms)?);

            for key in PAYMENT_DATE_KEYS {
                normalize_member_date(&mut members, key)?;
            }
            record::<Payment>("paymentsList", members)
        })
        .collect()
}

fn normalize_member_date(members: &mut Map<String, Value>, key: &str) -> Result<()> {
    let Some(Value::String(raw)) = members.get(key) else {
        return Ok(());
    };

    if raw.trim().is_empty() {
        members.remove(key);
    } else {
        let normalized = normalize_date(key, raw)?;
        members.insert(key.to_string(), Value::String(normalized));
    }
    Ok(())
}

/// Group declared on a member of a repeated group, e.g. an item's VAT.
fn member_group<'a>(reader: &FieldReader<'a>, key: &str, member: &str) -> Result<&'a FieldGroup> {
    reader
        .group(key)?
        .field(member)
        .and_then(FieldSpec::group)
        .ok_or_else(|| BridgeError::Internal(format!("Field '{key}.{member}' is not a group")))
}

fn record<T: DeserializeOwned>(key: &str, members: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(members))
        .map_err(|err| BridgeError::Validation(format!("Field '{key}' is invalid: {err}")))
}

fn to_member<T: serde::Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record)
        .map_err(|err| BridgeError::Internal(format!("Failed to serialize request: {err}")))
}
