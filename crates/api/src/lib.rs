//! # ficbridge App
//!
//! Application layer - commands, CLI definition and dependency wiring.
//!
//! This crate contains:
//! - Commands (list resources, describe schema, run a batch, OAuth settings)
//! - Application context (dependency injection)
//! - The `ficbridge` command-line host
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
