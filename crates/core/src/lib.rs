//! # ficbridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The static resource registry and schema compiler
//! - The request assembler turning item field values into API calls
//! - The batch dispatcher and credential resolver
//! - Port interfaces (traits) for the external API and credential store
//!
//! ## Architecture Principles
//! - Only depends on `ficbridge-domain`
//! - No HTTP, filesystem or environment access
//! - All external dependencies via traits

pub mod assembler;
pub mod calls;
pub mod credentials;
pub mod dispatch;
pub mod ports;
pub mod registry;
pub mod resources;
pub mod schema;

pub use assembler::{assemble, AssemblyContext};
pub use calls::{ApiCall, CallPlan, Completion};
pub use credentials::resolve_access_token;
pub use dispatch::{DispatchError, Dispatcher};
pub use ports::{CredentialSource, InvoicingApi};
pub use registry::Registry;
pub use resources::{Operation, ResourceKind};
pub use schema::{compile, CompiledField, CompiledSchema};
