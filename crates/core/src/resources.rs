//! Resource and operation keys
//!
//! The registry describes resources as data; these enums are the typed keys
//! the assembler dispatches on once a (resource, operation) pair has been
//! validated against the registry.

use ficbridge_domain::impl_wire_name_conversions;

/// Fatture in Cloud resource handled by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Client,
    Company,
    IssuedDocument,
    Supplier,
    User,
}

impl_wire_name_conversions!(ResourceKind {
    Client => "client",
    Company => "company",
    IssuedDocument => "issuedDocument",
    Supplier => "supplier",
    User => "user",
});

/// Operation key, meaningful only together with a [`ResourceKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetInfo,
    GetAll,
    Update,
    GetPlanUsage,
    ListCompanies,
}

impl_wire_name_conversions!(Operation {
    Create => "create",
    Delete => "delete",
    Get => "get",
    GetInfo => "getInfo",
    GetAll => "getAll",
    Update => "update",
    GetPlanUsage => "getPlanUsage",
    ListCompanies => "listCompanies",
});
