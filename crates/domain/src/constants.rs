//! Bridge constants
//!
//! Centralized location for the fixed values shared by every layer: the
//! Fatture in Cloud endpoints, OAuth2 configuration and payload defaults.

use crate::types::DocumentType;

// Fatture in Cloud API
pub const DEFAULT_API_BASE_URL: &str = "https://api-v2.fattureincloud.it";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("ficbridge/", env!("CARGO_PKG_VERSION"));

// OAuth2 (authorization code flow, owned by the host's credential manager)
pub const OAUTH_CREDENTIAL_NAME: &str = "fattureInCloudOAuth2Api";
pub const OAUTH_GRANT_TYPE: &str = "authorizationCode";
pub const OAUTH_AUTHORIZATION_URL: &str = "https://api-v2.fattureincloud.it/oauth/authorize";
pub const OAUTH_TOKEN_URL: &str = "https://api-v2.fattureincloud.it/oauth/token";
pub const OAUTH_DOCUMENTATION_URL: &str = "https://developers.fattureincloud.it/docs/authentication/";
pub const OAUTH_SCOPE: &str = "entity.clients:a entity.suppliers:a entity.products:a \
issued_documents.invoices:a issued_documents.credit_notes:a issued_documents.receipts:a \
issued_documents.orders:a issued_documents.quotes:a issued_documents.proformas:a \
issued_documents.delivery_notes:a issued_documents.work_reports:a \
issued_documents.supplier_orders:a issued_documents.self_invoices:a received_documents:a \
stock:a receipts:a taxes:a archive:a cashbook:a settings:a situation:a";

pub const MISSING_TOKEN_MESSAGE: &str = "Access token not found in credentials. Please \
re-authenticate your Fatture in Cloud connection.";

// Listing
pub const DEFAULT_LIST_LIMIT: usize = 50;
pub const MIN_LIST_LIMIT: usize = 1;

// Issued document line defaults
pub const DEFAULT_VAT_ID: i64 = 0;
pub const DEFAULT_VAT_VALUE: i64 = 22;
pub const DEFAULT_PAYMENT_TERMS_DAYS: i64 = 0;
pub const DEFAULT_COUNTRY: &str = "Italia";

// Issued documents are listed by this type regardless of the declared options.
pub const LIST_DOCUMENT_TYPE: DocumentType = DocumentType::Invoice;

pub const CLIENT_INFO_PLACEHOLDER: &str = "Client info endpoint not yet implemented in SDK";
