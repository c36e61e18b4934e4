//! HTTP client for the lookup backend.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use url::Url;

use crate::i18n::Locale;

/// Maximum backend response body we will buffer.
const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// A single live lookup: postcode, optional UPRN, resolved locale.
#[derive(Debug, Clone)]
pub struct LookupQuery {
    pub postcode: String,
    pub uprn: Option<String>,
    pub locale: Locale,
}

/// Opaque structured ballot payload owned by the backend contract.
#[derive(Debug, Clone)]
pub struct BallotPayload(pub Value);

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("backend unreachable: {0}")]
    Unavailable(String),

    #[error("backend returned status {0}")]
    Status(StatusCode),

    #[error("backend response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend URL invalid: {0}")]
    Url(#[from] url::ParseError),
}

/// The lookup operation the live handlers depend on.
///
/// Behind a trait so tests can inject a programmable backend without a
/// network listener.
#[async_trait]
pub trait LookupBackend: Send + Sync {
    async fn lookup(&self, query: &LookupQuery) -> Result<BallotPayload, LookupError>;
}

/// Production implementation over the configured backend base URL.
pub struct HttpLookupBackend {
    client: Client<HttpConnector, Body>,
    base_url: Url,
}

impl HttpLookupBackend {
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, base_url }
    }

    fn request_url(&self, query: &LookupQuery) -> Result<Url, LookupError> {
        let path = match &query.uprn {
            Some(uprn) => format!("address/{}/{uprn}", query.postcode),
            None => format!("postcode/{}", query.postcode),
        };
        let mut url = self.base_url.join(&path)?;
        url.query_pairs_mut().append_pair("locale", query.locale.tag());
        Ok(url)
    }
}

#[async_trait]
impl LookupBackend for HttpLookupBackend {
    async fn lookup(&self, query: &LookupQuery) -> Result<BallotPayload, LookupError> {
        let url = self.request_url(query)?;

        let request = Request::builder()
            .uri(url.as_str())
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), MAX_RESPONSE_BYTES)
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;
        let payload: Value = serde_json::from_slice(&bytes)?;
        Ok(BallotPayload(payload))
    }
}
