//! # ficbridge Domain
//!
//! Business domain types and models for the Fatture in Cloud bridge.
//!
//! This crate contains:
//! - Declarative schema types (resources, operations, fields)
//! - Batch execution types (items, result envelopes, failure policy)
//! - Typed request records for issued documents and parties
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other ficbridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
