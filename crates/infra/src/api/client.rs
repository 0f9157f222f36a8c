//! Fatture in Cloud API client
//!
//! Implements the [`InvoicingApi`] port over HTTPS with bearer
//! authentication. One call is one request; the token is supplied per call
//! by the dispatcher and never logged.

use async_trait::async_trait;
use ficbridge_core::{ApiCall, InvoicingApi};
use ficbridge_domain::{AccessToken, ApiConfig, BridgeError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::status_error;
use super::routes::Route;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Reqwest-backed [`InvoicingApi`]
#[derive(Clone)]
pub struct FicApiClient {
    http: HttpClient,
    base_url: Url,
}

impl FicApiClient {
    /// # Errors
    ///
    /// `BridgeError::Config` when `base_url` is not an absolute http(s) URL.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| BridgeError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(BridgeError::Config(format!(
                "API base URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        Ok(Self { http, base_url })
    }

    /// Client built from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(HttpClient::from_config(config)?, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, route: &Route) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", route.path))
            .map_err(|e| BridgeError::Internal(format!("Invalid request path '{}': {e}", route.path)))?;

        if !route.query.is_empty() {
            url.query_pairs_mut().extend_pairs(route.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    #[instrument(
        skip(self, token, name, route),
        fields(call = name, method = %route.method, path = %route.path)
    )]
    async fn execute(&self, token: &AccessToken, name: &'static str, route: Route) -> Result<Value> {
        let url = self.url_for(&route)?;

        let mut request = self
            .http
            .request(route.method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token.expose()))
            .header(ACCEPT, "application/json");

        if let Some(body) = &route.body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        let text = response.text().await.map_err(|e| BridgeError::from(InfraError::from(e)))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "API call rejected");
            return Err(status_error(status, &text));
        }

        // 204/205 carry no body by definition; deletes answer this way.
        if status == StatusCode::NO_CONTENT
            || status == StatusCode::RESET_CONTENT
            || text.trim().is_empty()
        {
            debug!(status = status.as_u16(), "API call returned no content");
            return Ok(Value::Null);
        }

        let body = serde_json::from_str(&text).map_err(|e| {
            BridgeError::Network(format!("Failed to parse response from {name}: {e}"))
        })?;

        info!(status = status.as_u16(), "API call succeeded");
        Ok(body)
    }
}

#[async_trait]
impl InvoicingApi for FicApiClient {
    async fn send(&self, token: &AccessToken, call: ApiCall) -> Result<Value> {
        let name = call.name();
        self.execute(token, name, Route::from(call)).await
    }
}

#[cfg(test)]
mod tests {
    use ficbridge_domain::DocumentType;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client_for(server: &MockServer) -> FicApiClient {
        FicApiClient::new(HttpClient::new().expect("http client"), &server.uri()).expect("client")
    }

    fn token() -> AccessToken {
        AccessToken::new("test-token")
    }

    #[tokio::test]
    async fn sends_bearer_token_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/c/1/entities/clients"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({ "data": { "name": "Acme" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 5 } })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let call = ApiCall::CreateClient { company_id: 1, body: json!({ "data": { "name": "Acme" } }) };
        let response = client.send(&token(), call).await.expect("response");

        assert_eq!(response, json!({ "data": { "id": 5 } }));
    }

    #[tokio::test]
    async fn list_documents_sends_type_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/c/2/issued_documents"))
            .and(query_param("type", "invoice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let call =
            ApiCall::ListIssuedDocuments { company_id: 2, document_type: DocumentType::Invoice };

        assert_eq!(client.send(&token(), call).await.expect("response"), json!({ "data": [] }));
    }

    #[tokio::test]
    async fn no_content_becomes_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/c/1/entities/suppliers/3"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let call = ApiCall::DeleteSupplier { company_id: 1, supplier_id: 3 };

        assert_eq!(client.send(&token(), call).await.expect("response"), Value::Null);
    }

    #[tokio::test]
    async fn error_status_becomes_external_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/info"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "error_description": "The access token is invalid" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.send(&token(), ApiCall::GetUserInfo).await.unwrap_err();

        match err {
            BridgeError::ExternalApi(failure) => {
                assert_eq!(failure.status, Some(401));
                assert_eq!(failure.status_text.as_deref(), Some("Unauthorized"));
                assert_eq!(failure.most_specific_message(), "The access token is invalid");
            }
            other => panic!("expected external API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/user/companies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FicApiClient::new(
            HttpClient::new().expect("http client"),
            &format!("{}/v2/", server.uri()),
        )
        .expect("client");

        client.send(&token(), ApiCall::ListUserCompanies).await.expect("response");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let http = HttpClient::new().expect("http client");

        assert!(matches!(FicApiClient::new(http.clone(), "not a url"), Err(BridgeError::Config(_))));
        assert!(matches!(
            FicApiClient::new(http, "ftp://api.example.com"),
            Err(BridgeError::Config(_))
        ));
    }
}
