//! Typed request records for Fatture in Cloud payloads
//!
//! Each record mirrors the vendor's JSON field names. Unknown keys supplied
//! by the host are kept in `extra` and sent through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::constants::{
    DEFAULT_PAYMENT_TERMS_DAYS, DEFAULT_VAT_ID, DEFAULT_VAT_VALUE,
};
use crate::impl_wire_name_conversions;

/// Issued document type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    CreditNote,
    DeliveryNote,
    #[default]
    Invoice,
    Order,
    Proforma,
    Quote,
    Receipt,
    SelfInvoice,
    SupplierOrder,
    WorkReport,
}

impl_wire_name_conversions!(DocumentType {
    CreditNote => "credit_note",
    DeliveryNote => "delivery_note",
    Invoice => "invoice",
    Order => "order",
    Proforma => "proforma",
    Quote => "quote",
    Receipt => "receipt",
    SelfInvoice => "self_invoice",
    SupplierOrder => "supplier_order",
    WorkReport => "work_report",
});

impl DocumentType {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CreditNote => "Credit Note",
            Self::DeliveryNote => "Delivery Note",
            Self::Invoice => "Invoice",
            Self::Order => "Order",
            Self::Proforma => "Proforma",
            Self::Quote => "Quote",
            Self::Receipt => "Receipt",
            Self::SelfInvoice => "Self Invoice",
            Self::SupplierOrder => "Supplier Order",
            Self::WorkReport => "Work Report",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    NotPaid,
    Paid,
    Reversed,
}

impl_wire_name_conversions!(PaymentStatus {
    NotPaid => "not_paid",
    Paid => "paid",
    Reversed => "reversed",
});

impl PaymentStatus {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::NotPaid => "Not Paid",
            Self::Paid => "Paid",
            Self::Reversed => "Reversed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTermsType {
    #[default]
    Standard,
    EndOfMonth,
}

impl_wire_name_conversions!(PaymentTermsType {
    Standard => "standard",
    EndOfMonth => "end_of_month",
});

impl PaymentTermsType {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::EndOfMonth => "End of Month",
        }
    }
}

/// Plan usage counter queried through the company resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanUsageCategory {
    #[default]
    Clients,
    Documents,
    Products,
    Suppliers,
}

impl_wire_name_conversions!(PlanUsageCategory {
    Clients => "clients",
    Documents => "documents",
    Products => "products",
    Suppliers => "suppliers",
});

impl PlanUsageCategory {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Clients => "Clients",
            Self::Documents => "Documents",
            Self::Products => "Products",
            Self::Suppliers => "Suppliers",
        }
    }
}

/// Legal form of a client or supplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyType {
    #[default]
    Company,
    Person,
}

impl_wire_name_conversions!(PartyType {
    Company => "company",
    Person => "person",
});

impl PartyType {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Person => "Person",
        }
    }
}

/// Counterparty of an issued document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Number>,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub address_province: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub address_extra: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub certified_email: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub ei_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// A name made only of whitespace counts as missing.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// VAT rate applied to a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vat {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "default_vat_value")]
    pub value: Number,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
}

fn default_vat_value() -> Number {
    Number::from(DEFAULT_VAT_VALUE)
}

impl Default for Vat {
    /// Standard Italian rate: `{id: 0, value: 22, description: ""}`.
    fn default() -> Self {
        Self { id: DEFAULT_VAT_ID, value: default_vat_value(), description: String::new() }
    }
}

/// Line item of an issued document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Number>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
    #[serde(default = "zero")]
    pub net_price: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Number>,
    #[serde(default = "default_qty")]
    pub qty: Number,
    #[serde(default)]
    pub vat: Vat,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_qty() -> Number {
    Number::from(1)
}

fn zero() -> Number {
    Number::from(0)
}

/// Free-text member: `null` reads as empty, numbers and booleans as their
/// JSON text.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(scalar.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Due-date rule of a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    #[serde(default)]
    pub days: i64,
    #[serde(rename = "type", default)]
    pub kind: PaymentTermsType,
}

impl Default for PaymentTerms {
    fn default() -> Self {
        Self { days: DEFAULT_PAYMENT_TERMS_DAYS, kind: PaymentTermsType::Standard }
    }
}

/// Scheduled payment of an issued document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default = "zero")]
    pub amount: Number,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_terms: PaymentTerms,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of an issued document create or update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedDocumentDraft {
    /// Only sent on create.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    pub entity: Entity,
    /// Omitted entirely when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub items_list: Vec<DocumentItem>,
    #[serde(default)]
    pub payments_list: Vec<Payment>,
}

/// Body of a client or supplier create or update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyDraft {
    pub name: String,
}
