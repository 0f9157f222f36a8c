//! # ficbridge Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-backed Fatture in Cloud client (`InvoicingApi`)
//! - Credential sources (static, JSON file, environment)
//! - Configuration loading (environment, JSON/TOML files)
//! - Tracing initialization
//!
//! ## Architecture
//! - Implements traits defined in `ficbridge-core`
//! - Contains all "impure" code (network, filesystem, process environment)

pub mod api;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::FicApiClient;
pub use credentials::{EnvCredentialSource, FileCredentialSource, StaticCredentials};
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::init_tracing;

/// Process environment is global; tests that touch it serialize on this lock.
#[cfg(test)]
pub(crate) static ENV_LOCK: once_cell::sync::Lazy<std::sync::Mutex<()>> =
    once_cell::sync::Lazy::new(|| std::sync::Mutex::new(()));
