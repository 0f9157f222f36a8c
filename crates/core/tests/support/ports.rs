//! Mock port implementations for testing

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ficbridge_core::{ApiCall, CredentialSource, InvoicingApi};
use ficbridge_domain::{AccessToken, ApiFailure, BridgeError, Result as DomainResult};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

/// In-memory mock for `InvoicingApi`.
///
/// Replies with scripted responses in order, then with `{ "data": {} }`.
/// Every call and the token it carried are recorded.
#[derive(Default, Clone)]
pub struct MockInvoicingApi {
    responses: Arc<Mutex<VecDeque<DomainResult<Value>>>>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
    tokens: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockInvoicingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, body: Value) -> Self {
        self.push(Ok(body));
        self
    }

    /// Queue an HTTP failure with a JSON body.
    pub fn with_failure(self, status: u16, status_text: &str, body: Value) -> Self {
        self.push(Err(BridgeError::ExternalApi(ApiFailure::from_status(
            status,
            Some(status_text.to_string()),
            Some(body),
        ))));
        self
    }

    fn push(&self, response: DomainResult<Value>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().map(|tokens| tokens.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl InvoicingApi for MockInvoicingApi {
    async fn send(&self, token: &AccessToken, call: ApiCall) -> DomainResult<Value> {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.push(token.expose().to_string());
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| Ok(json!({ "data": {} })))
    }
}

/// `InvoicingApi` that cancels the batch on its `cancel_on`-th call and then
/// never answers.
#[derive(Clone)]
pub struct CancellingApi {
    token: CancellationToken,
    cancel_on: usize,
    seen: Arc<Mutex<usize>>,
}

impl CancellingApi {
    pub fn new(token: CancellationToken, cancel_on: usize) -> Self {
        Self { token, cancel_on, seen: Arc::new(Mutex::new(0)) }
    }
}

#[async_trait]
impl InvoicingApi for CancellingApi {
    async fn send(&self, _token: &AccessToken, _call: ApiCall) -> DomainResult<Value> {
        let call_number = {
            let mut seen =
                self.seen.lock().map_err(|_| BridgeError::Internal("poisoned".into()))?;
            *seen += 1;
            *seen
        };

        if call_number >= self.cancel_on {
            self.token.cancel();
            std::future::pending::<()>().await;
        }
        Ok(json!({ "data": { "call": call_number } }))
    }
}

/// Credential source returning a fixed credential bag
#[derive(Clone)]
pub struct StaticCredentialSource {
    raw: Value,
    fetches: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl StaticCredentialSource {
    pub fn new(raw: Value) -> Self {
        Self { raw, fetches: Arc::new(Mutex::new(0)) }
    }

    pub fn token(token: &str) -> Self {
        Self::new(json!({ "oauthTokenData": { "access_token": token } }))
    }

    pub fn fetches(&self) -> usize {
        self.fetches.lock().map(|count| *count).unwrap_or_default()
    }
}

#[async_trait]
impl CredentialSource for StaticCredentialSource {
    async fn fetch(&self) -> DomainResult<Value> {
        if let Ok(mut count) = self.fetches.lock() {
            *count += 1;
        }
        Ok(self.raw.clone())
    }
}
