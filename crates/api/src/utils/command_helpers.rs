//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use crate::utils::logging::{log_command_execution, ErrorLabel};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext) -> Result<Value, BridgeError> {
///     execute_with_logging("my_module::my_command", || async {
///         do_something(ctx).await
///     })
///     .await
/// }
/// ```
pub async fn execute_with_logging<F, Fut, T, E>(command_name: &str, command_fn: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: ErrorLabel,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(ErrorLabel::error_label);
    log_command_execution(command_name, start.elapsed(), error_type);

    result
}
