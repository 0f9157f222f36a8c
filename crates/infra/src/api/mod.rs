//! Fatture in Cloud API access
//!
//! - `routes`: `ApiCall` to HTTP method, path, query and body
//! - `client`: the reqwest-backed `InvoicingApi` implementation
//! - `errors`: non-success responses to `BridgeError::ExternalApi`

pub mod client;
pub mod errors;
pub mod routes;

pub use client::FicApiClient;
pub use routes::Route;
