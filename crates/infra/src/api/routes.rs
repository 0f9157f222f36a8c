//! Fatture in Cloud REST routes
//!
//! Maps each [`ApiCall`] to its HTTP method, path, query and body.

use ficbridge_core::ApiCall;
use reqwest::Method;
use serde_json::Value;

/// One resolved HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl Route {
    fn new(method: Method, path: String) -> Self {
        Self { method, path, query: Vec::new(), body: None }
    }

    fn get(path: String) -> Self {
        Self::new(Method::GET, path)
    }

    fn delete(path: String) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn post(path: String, body: Value) -> Self {
        Self { body: Some(body), ..Self::new(Method::POST, path) }
    }

    fn put(path: String, body: Value) -> Self {
        Self { body: Some(body), ..Self::new(Method::PUT, path) }
    }

    fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }
}

fn clients(company_id: i64) -> String {
    format!("/c/{company_id}/entities/clients")
}

fn suppliers(company_id: i64) -> String {
    format!("/c/{company_id}/entities/suppliers")
}

fn issued_documents(company_id: i64) -> String {
    format!("/c/{company_id}/issued_documents")
}

impl From<ApiCall> for Route {
    fn from(call: ApiCall) -> Self {
        match call {
            ApiCall::CreateClient { company_id, body } => Self::post(clients(company_id), body),
            ApiCall::GetClient { company_id, client_id } => {
                Self::get(format!("{}/{client_id}", clients(company_id)))
            }
            ApiCall::ListClients { company_id } => Self::get(clients(company_id)),
            ApiCall::ModifyClient { company_id, client_id, body } => {
                Self::put(format!("{}/{client_id}", clients(company_id)), body)
            }
            ApiCall::DeleteClient { company_id, client_id } => {
                Self::delete(format!("{}/{client_id}", clients(company_id)))
            }

            ApiCall::CreateSupplier { company_id, body } => Self::post(suppliers(company_id), body),
            ApiCall::GetSupplier { company_id, supplier_id } => {
                Self::get(format!("{}/{supplier_id}", suppliers(company_id)))
            }
            ApiCall::ListSuppliers { company_id } => Self::get(suppliers(company_id)),
            ApiCall::ModifySupplier { company_id, supplier_id, body } => {
                Self::put(format!("{}/{supplier_id}", suppliers(company_id)), body)
            }
            ApiCall::DeleteSupplier { company_id, supplier_id } => {
                Self::delete(format!("{}/{supplier_id}", suppliers(company_id)))
            }

            ApiCall::CreateIssuedDocument { company_id, body } => {
                Self::post(issued_documents(company_id), body)
            }
            ApiCall::GetIssuedDocument { company_id, document_id } => {
                Self::get(format!("{}/{document_id}", issued_documents(company_id)))
            }
            ApiCall::ListIssuedDocuments { company_id, document_type } => {
                Self::get(issued_documents(company_id)).with_query("type", document_type.as_str())
            }
            ApiCall::ModifyIssuedDocument { company_id, document_id, body } => {
                Self::put(format!("{}/{document_id}", issued_documents(company_id)), body)
            }
            ApiCall::DeleteIssuedDocument { company_id, document_id } => {
                Self::delete(format!("{}/{document_id}", issued_documents(company_id)))
            }

            ApiCall::GetCompanyInfo { company_id } => {
                Self::get(format!("/c/{company_id}/company/info"))
            }
            ApiCall::GetCompanyPlanUsage { company_id, category } => {
                Self::get(format!("/c/{company_id}/company/plan_usage"))
                    .with_query("category", category.as_str())
            }

            ApiCall::GetUserInfo => Self::get("/user/info".to_string()),
            ApiCall::ListUserCompanies => Self::get("/user/companies".to_string()),
        }
    }
}
