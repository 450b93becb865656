// web_app/api/backend.rs - Relay to the external backend
//
// Every proxy route goes through `Backend::forward`: build the upstream URL,
// send the request, and hand back the JSON body exactly as received. Any
// failure becomes a `ProxyError`, which actix-web renders as a 500 with
// `{"error": ...}`.

use actix_web::web::Bytes;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use reqwest::{header::CONTENT_TYPE, Method};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

/// Version prefix of every backend route
const API_PREFIX: [&str; 2] = ["api", "v1"];

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("invalid backend host: {0}")]
    InvalidHost(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream response is not JSON: {0}")]
    Decode(String),
    #[error("upstream rejected the request: {0}")]
    Rejected(String),
    #[error("invalid request: {0}")]
    BadRequest(String),
}

/// JSON body of every proxy error response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Handle to the external backend, shared by all proxy routes
#[derive(Clone, Debug)]
pub struct Backend {
    client: reqwest::Client,
    base: Url,
}

impl Backend {
    pub fn new(host: &str) -> Result<Self, ProxyError> {
        Self::with_client(reqwest::Client::new(), host)
    }

    pub fn with_client(client: reqwest::Client, host: &str) -> Result<Self, ProxyError> {
        let base = Url::parse(host).map_err(|e| ProxyError::InvalidHost(format!("{host}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ProxyError::InvalidHost(host.to_string()));
        }
        Ok(Self { client, base })
    }

    pub fn host(&self) -> &Url {
        &self.base
    }

    /// Upstream URL for `/api/v1/<segments>`
    ///
    /// Segments are percent-encoded; the query string is appended verbatim.
    pub fn endpoint(&self, segments: &[&str], query: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PREFIX).extend(segments);
        }
        url.set_query(query.filter(|q| !q.is_empty()));
        url.set_fragment(None);
        url
    }

    /// Send one request upstream and return its JSON body, byte for byte
    ///
    /// The body is only checked to be JSON, never re-serialized. Non-2xx
    /// statuses and non-JSON bodies are errors. An empty 2xx body becomes
    /// `null`.
    pub async fn forward(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Bytes, ProxyError> {
        let url = self.endpoint(segments, query);
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("relay", %request_id, %method, path = url.path());

        let result = async {
            tracing::info!("Relaying request to {}", url);

            let mut request = self
                .client
                .request(method.clone(), url.clone())
                .header(CONTENT_TYPE, "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ProxyError::Status(status.as_u16()));
            }

            let bytes = response.bytes().await?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Bytes::from_static(b"null"));
            }
            serde_json::from_slice::<IgnoredAny>(&bytes).map_err(|e| ProxyError::Decode(e.to_string()))?;

            tracing::info!("Upstream responded with {} ({} bytes)", status, bytes.len());
            Ok(bytes)
        }
        .instrument(span.clone())
        .await;

        if let Err(e) = &result {
            span.in_scope(|| tracing::error!("Relay failed: {}", e));
        }
        result
    }
}

/// Turn the backend's string-encoded error payloads into errors
///
/// The user endpoints answer some failures with 2xx and a JSON string that
/// mentions `error_type`. Other bodies are returned untouched.
pub fn reject_error_payload(body: Bytes) -> Result<Bytes, ProxyError> {
    if let Ok(message) = serde_json::from_slice::<String>(&body) {
        if message.contains("error_type") {
            return Err(ProxyError::Rejected(message));
        }
    }
    Ok(body)
}
