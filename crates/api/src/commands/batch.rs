//! Batch execution commands

use std::path::Path;
use std::sync::Arc;

use ficbridge_core::{CredentialSource, DispatchError};
use ficbridge_domain::{BatchReport, BatchRequest, BridgeError, Result};
use ficbridge_infra::{EnvCredentialSource, FileCredentialSource};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_with_logging;

/// Read a batch request from a JSON file.
///
/// # Errors
/// `BridgeError::Config` when the file cannot be read,
/// `BridgeError::Validation` when it is not a valid batch.
pub async fn load_batch(path: &Path) -> Result<BatchRequest> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        BridgeError::Config(format!("Failed to read batch file {}: {e}", path.display()))
    })?;

    serde_json::from_str(&contents)
        .map_err(|e| BridgeError::Validation(format!("Invalid batch file {}: {e}", path.display())))
}

/// Credentials from a JSON file, or `FIC_ACCESS_TOKEN` when no file is given.
pub fn credential_source(path: Option<&Path>) -> Arc<dyn CredentialSource> {
    match path {
        Some(path) => Arc::new(FileCredentialSource::new(path)),
        None => Arc::new(EnvCredentialSource),
    }
}

/// Execute one batch against the configured API.
///
/// # Errors
/// See [`Dispatcher::execute`](ficbridge_core::Dispatcher::execute).
pub async fn run_batch(
    ctx: &AppContext,
    request: BatchRequest,
    credentials: Arc<dyn CredentialSource>,
    cancel: &CancellationToken,
) -> std::result::Result<BatchReport, DispatchError> {
    execute_with_logging("batch::run", || async {
        info!(
            resource = %request.resource,
            operation = %request.operation,
            items = request.items.len(),
            "Running batch"
        );
        ctx.dispatcher(credentials).execute(request, cancel).await
    })
    .await
}
