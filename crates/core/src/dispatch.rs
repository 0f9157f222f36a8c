//! Batch dispatcher
//!
//! Runs one batch sequentially: validate the (resource, operation) pair,
//! resolve credentials once, then assemble, send and complete each item in
//! order, applying the caller's failure policy.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use ficbridge_domain::constants::DEFAULT_LIST_LIMIT;
use ficbridge_domain::{
    AccessToken, BatchReport, BatchRequest, BridgeError, ErrorDetail, ExecutionItem, FailurePolicy,
    ResultEnvelope,
};
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::assembler::{assemble, AssemblyContext};
use crate::credentials::resolve_access_token;
use crate::ports::{CredentialSource, InvoicingApi};
use crate::registry;

/// Errors that end a batch without a report
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Raised before any item ran: unknown resource or operation, missing
    /// or unreadable credentials.
    #[error(transparent)]
    Rejected(#[from] BridgeError),

    /// Fail-fast abort on the first failing item. `completed` holds the
    /// envelopes emitted before it.
    #[error("Item {index} failed: {error}")]
    Aborted { index: usize, error: BridgeError, completed: Vec<ResultEnvelope> },
}

impl DispatchError {
    /// The underlying bridge error.
    pub fn error(&self) -> &BridgeError {
        match self {
            Self::Rejected(error) | Self::Aborted { error, .. } => error,
        }
    }
}

/// Batch executor bound to an API client and a credential source
pub struct Dispatcher {
    api: Arc<dyn InvoicingApi>,
    credentials: Arc<dyn CredentialSource>,
    default_policy: FailurePolicy,
    default_limit: usize,
    today: Option<NaiveDate>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn InvoicingApi>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            api,
            credentials,
            default_policy: FailurePolicy::default(),
            default_limit: DEFAULT_LIST_LIMIT,
            today: None,
        }
    }

    /// Policy applied to batches that do not choose one.
    #[must_use]
    pub fn with_default_policy(mut self, policy: FailurePolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// List limit applied to items that do not set one.
    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Pin the date used for documents created without one.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Execute a batch.
    ///
    /// Items run one at a time in ascending `index` order. Cancellation is checked before each
    /// item and raced against the in-flight call; envelopes already emitted
    /// are kept and the report is marked `cancelled`.
    ///
    /// # Errors
    ///
    /// `DispatchError::Rejected` when the batch cannot start (including a
    /// repeated item index),
    /// `DispatchError::Aborted` on the first item failure under
    /// `FailurePolicy::FailFast`.
    pub async fn execute(
        &self,
        request: BatchRequest,
        cancel: &CancellationToken,
    ) -> Result<BatchReport, DispatchError> {
        let batch_id = Uuid::now_v7();
        let span = info_span!(
            "dispatch_batch",
            %batch_id,
            resource = %request.resource,
            operation = %request.operation,
            items = request.items.len(),
        );

        self.run(batch_id, request, cancel).instrument(span).await
    }

    async fn run(
        &self,
        batch_id: Uuid,
        request: BatchRequest,
        cancel: &CancellationToken,
    ) -> Result<BatchReport, DispatchError> {
        registry::global().operation(&request.resource, &request.operation)?;
        let items = ordered_items(&request.items)?;

        let raw = self.credentials.fetch().await?;
        let token = resolve_access_token(&raw)?;

        let policy = request.failure_policy.unwrap_or(self.default_policy);
        let ctx = AssemblyContext::new(self.today.unwrap_or_else(|| Utc::now().date_naive()))
            .with_default_limit(self.default_limit);

        let mut envelopes = Vec::with_capacity(items.len());
        let mut cancelled = false;

        for item in items {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => None,
                result = self.run_item(&token, &request, item, &ctx) => Some(result),
            };

            match outcome {
                None => {
                    cancelled = true;
                    break;
                }
                Some(Ok(payload)) => {
                    debug!(index = item.index, "Item succeeded");
                    envelopes.push(ResultEnvelope::ok(item.index, payload));
                }
                Some(Err(error)) => {
                    warn!(
                        index = item.index,
                        error_kind = error.label(),
                        error = %error,
                        "Item failed"
                    );
                    if policy == FailurePolicy::FailFast {
                        return Err(DispatchError::Aborted {
                            index: item.index,
                            error,
                            completed: envelopes,
                        });
                    }
                    envelopes.push(ResultEnvelope::failed(item.index, ErrorDetail::from(&error)));
                }
            }
        }

        let report = BatchReport { batch_id, envelopes, cancelled };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            cancelled = report.cancelled,
            "Batch finished"
        );
        Ok(report)
    }

    async fn run_item(
        &self,
        token: &AccessToken,
        request: &BatchRequest,
        item: &ExecutionItem,
        ctx: &AssemblyContext,
    ) -> Result<Value, BridgeError> {
        let plan = assemble(&request.resource, &request.operation, &item.field_values, ctx)?;

        let response = match plan.call {
            Some(call) => {
                debug!(index = item.index, call = call.name(), "Sending request");
                self.api.send(token, call).await?
            }
            None => Value::Null,
        };

        Ok(plan.completion.complete(response))
    }
}

/// Items sorted by `index`; a repeated index rejects the batch.
fn ordered_items(items: &[ExecutionItem]) -> Result<Vec<&ExecutionItem>, BridgeError> {
    let mut ordered: Vec<&ExecutionItem> = items.iter().collect();
    ordered.sort_by_key(|item| item.index);

    if let Some(pair) = ordered.windows(2).find(|pair| pair[0].index == pair[1].index) {
        return Err(BridgeError::Validation(format!(
            "Duplicate item index {} in batch",
            pair[0].index
        )));
    }

    Ok(ordered)
}
