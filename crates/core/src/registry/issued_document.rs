//! Issued document descriptor
//!
//! The richest resource: a nested entity, repeated line items with a VAT
//! sub-group and repeated payments with a terms sub-group.

use ficbridge_domain::constants::{
    DEFAULT_COUNTRY, DEFAULT_PAYMENT_TERMS_DAYS, DEFAULT_VAT_ID, DEFAULT_VAT_VALUE,
};
use ficbridge_domain::{
    DocumentType, FieldGroup, FieldSpec, OptionValue, PaymentStatus, PaymentTermsType,
    ResourceDescriptor,
};

use super::fields::{company_id, crud_operations, limit, record_id, return_all, text};

const WRITE_OPERATIONS: &[&str] = &["create", "update"];

pub(super) fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "issuedDocument".to_string(),
        display_name: "Issued Document".to_string(),
        fields: vec![
            company_id(),
            record_id("documentId", "Document ID", "document"),
            document_type(),
            entity(),
            FieldSpec::date_time("date", "Date")
                .with_description("Document date (defaults to today on create)")
                .for_operations(WRITE_OPERATIONS),
            FieldSpec::number("number", "Number")
                .with_default(1)
                .with_description("Document number")
                .for_operations(WRITE_OPERATIONS),
            FieldSpec::string("subject", "Subject")
                .with_default("")
                .with_description("Document subject")
                .for_operations(WRITE_OPERATIONS),
            items_list(),
            payments_list(),
            additional_fields(),
            return_all(),
            limit(),
        ],
        operations: crud_operations("document", "documents"),
    }
}

fn document_type() -> FieldSpec {
    FieldSpec::options(
        "documentType",
        "Document Type",
        DocumentType::ALL
            .iter()
            .map(|kind| OptionValue::new(kind.display_name(), kind.as_str()))
            .collect(),
    )
    .required()
    .with_default(DocumentType::default().as_str())
    .with_description("The type of document to create")
    .for_operations(&["create"])
}

fn entity() -> FieldSpec {
    let details = FieldGroup::new(
        "entityDetails",
        "Entity Details",
        vec![
            text("address_city", "Address City", "Entity city"),
            text("address_extra", "Address Extra", "Additional address information"),
            text("address_postal_code", "Address Postal Code", "Entity postal code"),
            text("address_province", "Address Province", "Entity province"),
            text("address_street", "Address Street", "Entity street address"),
            text("certified_email", "Certified Email", "Entity certified email (PEC)")
                .with_placeholder("name@pec.email.com"),
            text("country", "Country", "Entity country").with_default(DEFAULT_COUNTRY),
            text("ei_code", "EI Code", "Electronic invoice code"),
            text("email", "Email", "Entity email").with_placeholder("name@email.com"),
            FieldSpec::number("id", "ID").with_description("Existing client ID, if any"),
            text("name", "Name", "Entity (client) name").required(),
            text("tax_code", "Tax Code", "Entity tax code"),
            text("vat_number", "VAT Number", "Entity VAT number"),
        ],
    );

    FieldSpec::nested("entity", "Entity", details)
        .required()
        .with_placeholder("Add Entity")
        .with_description("The document's counterparty")
        .for_operations(WRITE_OPERATIONS)
}

fn items_list() -> FieldSpec {
    let vat = FieldGroup::new(
        "vatDetails",
        "VAT Details",
        vec![
            FieldSpec::number("id", "VAT ID").with_default(DEFAULT_VAT_ID),
            FieldSpec::number("value", "VAT Value").with_default(DEFAULT_VAT_VALUE),
            text("description", "Description", "VAT description").with_default(""),
        ],
    );

    let item = FieldGroup::new(
        "item",
        "Item",
        vec![
            text("category", "Category", "Item category"),
            text("code", "Code", "Item code"),
            text("description", "Description", "Item description"),
            FieldSpec::number("discount", "Discount")
                .with_default(0)
                .with_description("Discount percentage"),
            FieldSpec::number("gross_price", "Gross Price").with_description("Gross price"),
            text("measure", "Measure", "Unit of measure"),
            text("name", "Name", "Item name").required(),
            FieldSpec::number("net_price", "Net Price")
                .required()
                .with_default(0)
                .with_description("Net price"),
            FieldSpec::number("product_id", "Product ID").with_description("Product ID"),
            FieldSpec::number("qty", "Quantity")
                .required()
                .with_default(1)
                .with_description("Quantity"),
            FieldSpec::nested("vat", "VAT", vat).with_placeholder("Add VAT"),
        ],
    );

    FieldSpec::repeated("itemsList", "Items", item)
        .with_placeholder("Add Item")
        .with_description("Document line items")
        .for_operations(WRITE_OPERATIONS)
}

fn payments_list() -> FieldSpec {
    let terms = FieldGroup::new(
        "termsDetails",
        "Terms Details",
        vec![
            FieldSpec::number("days", "Days").with_default(DEFAULT_PAYMENT_TERMS_DAYS),
            FieldSpec::options(
                "type",
                "Type",
                PaymentTermsType::ALL
                    .iter()
                    .map(|kind| OptionValue::new(kind.display_name(), kind.as_str()))
                    .collect(),
            )
            .with_default(PaymentTermsType::default().as_str()),
        ],
    );

    let payment = FieldGroup::new(
        "payment",
        "Payment",
        vec![
            FieldSpec::number("amount", "Amount")
                .required()
                .with_default(0)
                .with_description("Payment amount"),
            FieldSpec::date_time("due_date", "Due Date")
                .required()
                .with_description("Payment due date"),
            FieldSpec::options(
                "status",
                "Status",
                PaymentStatus::ALL
                    .iter()
                    .map(|status| OptionValue::new(status.display_name(), status.as_str()))
                    .collect(),
            )
            .with_default(PaymentStatus::default().as_str())
            .with_description("Payment status"),
            FieldSpec::nested("payment_terms", "Payment Terms", terms)
                .with_placeholder("Add Payment Terms"),
        ],
    );

    FieldSpec::repeated("paymentsList", "Payments", payment)
        .with_placeholder("Add Payment")
        .with_description("Document payments")
        .for_operations(WRITE_OPERATIONS)
}

fn additional_fields() -> FieldSpec {
    FieldSpec::collection(
        "additionalFields",
        "Additional Fields",
        vec![
            FieldSpec::boolean("e_invoice", "E-Invoice")
                .with_default(false)
                .with_description("Whether this is an electronic invoice"),
            text("notes", "Notes", "Document notes"),
            text("numeration", "Numeration", "Document numeration"),
            text("rc_center", "RC Center", "Revenue center"),
            FieldSpec::boolean("use_gross_prices", "Use Gross Prices")
                .with_default(false)
                .with_description("Whether to use gross prices"),
            text("visible_subject", "Visible Subject", "Visible subject"),
        ],
    )
    .with_placeholder("Add Field")
    .for_operations(WRITE_OPERATIONS)
}
