//! Shared test helpers for `ficbridge-core` integration tests.
//!
//! In-memory port implementations so dispatcher tests can script API
//! responses and inspect the calls that were made.

pub mod ports;
