//! Domain types and models

pub mod credentials;
pub mod documents;
pub mod execution;
pub mod schema;

pub use credentials::AccessToken;
pub use documents::{
    DocumentItem, DocumentType, Entity, IssuedDocumentDraft, PartyDraft, PartyType, Payment,
    PaymentStatus, PaymentTerms, PaymentTermsType, PlanUsageCategory, Vat,
};
pub use execution::{
    BatchReport, BatchRequest, ErrorDetail, ExecutionItem, FailurePolicy, FieldValues,
    ResultEnvelope,
};
pub use schema::{
    DisplayCondition, FieldGroup, FieldKind, FieldSpec, OperationDescriptor, OptionValue,
    ResourceDescriptor,
};
