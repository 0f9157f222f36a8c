//! Host-facing commands
//!
//! Each command is a plain async function over [`AppContext`] so the CLI
//! and embedding hosts share one implementation.
//!
//! [`AppContext`]: crate::context::AppContext

mod batch;
mod oauth;
mod schema;

pub use batch::*;
pub use oauth::*;
pub use schema::*;
