// web_app/client.rs - HTTP access to the storefront proxy routes
//
// The search session only talks to the backend through `MarketApi`, so tests
// can script responses and the browser build can reuse reqwest's fetch backend.

use crate::web_app::model::{Genre, MarketItem};
use thiserror::Error;

/// Proxy route listing all genres
pub const GENRES_PATH: &str = "/api/master/genres";

/// Proxy route for NFT search; takes the query string built by the query builder
pub const SEARCH_PATH: &str = "/api/nft/search";

/// Origin used when no browser location is available (SSR, native tools)
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Read access to the storefront proxy routes
///
/// Implementations are used from a single task; futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait MarketApi {
    /// Full genre list in server order
    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError>;

    /// Run a search with an already encoded query string
    async fn search(&self, query: &str) -> Result<Vec<MarketItem>, ClientError>;
}

impl<T: MarketApi> MarketApi for std::rc::Rc<T> {
    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        (**self).fetch_genres().await
    }

    async fn search(&self, query: &str) -> Result<Vec<MarketItem>, ClientError> {
        (**self).search(query).await
    }
}

/// `MarketApi` over HTTP, rooted at the storefront origin
#[derive(Clone, Debug)]
pub struct HttpMarketApi {
    client: reqwest::Client,
    origin: String,
}

impl HttpMarketApi {
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), origin)
    }

    pub fn with_client(client: reqwest::Client, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { client, origin }
    }

    /// Client rooted at the page's own origin
    ///
    /// In the browser this is `window.location.origin`; elsewhere it falls
    /// back to [`DEFAULT_ORIGIN`].
    pub fn same_origin() -> Self {
        #[cfg(feature = "hydrate")]
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        #[cfg(not(feature = "hydrate"))]
        let origin = DEFAULT_ORIGIN.to_string();

        Self::new(origin)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn genres_url(&self) -> String {
        format!("{}{}", self.origin, GENRES_PATH)
    }

    pub fn search_url(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.origin, SEARCH_PATH)
        } else {
            format!("{}{}?{}", self.origin, SEARCH_PATH, query)
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl MarketApi for HttpMarketApi {
    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        self.get_json(&self.genres_url()).await
    }

    async fn search(&self, query: &str) -> Result<Vec<MarketItem>, ClientError> {
        self.get_json(&self.search_url(query)).await
    }
}
