// common/mod.rs - Shared test utilities
//
// - ScriptedMarketApi: MarketApi double with queued replies, some of which
//   can be held back until the test releases them
// - ScriptedWallet: WalletProvider double
// - spawn_fake_backend / spawn_proxy: real HTTP servers on ephemeral ports
//   for the proxy and end-to-end suites (proxy feature only)

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use nft_storefront::web_app::client::{ClientError, MarketApi};
use nft_storefront::web_app::model::{Genre, MarketItem};
use nft_storefront::web_app::wallet::{WalletError, WalletProvider};
use tokio::sync::oneshot;

/// One queued reply of the scripted API
pub enum Reply<T> {
    Now(Result<T, ClientError>),
    Later(oneshot::Receiver<Result<T, ClientError>>),
}

/// A reply that stays pending until the returned sender is used
pub fn deferred<T>() -> (Reply<T>, oneshot::Sender<Result<T, ClientError>>) {
    let (tx, rx) = oneshot::channel();
    (Reply::Later(rx), tx)
}

#[derive(Default)]
pub struct ScriptedMarketApi {
    genre_replies: RefCell<VecDeque<Reply<Vec<Genre>>>>,
    search_replies: RefCell<VecDeque<Reply<Vec<MarketItem>>>>,
    queries: RefCell<Vec<String>>,
    genre_calls: Cell<usize>,
}

impl ScriptedMarketApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres(self, reply: Result<Vec<Genre>, ClientError>) -> Self {
        self.genre_replies.borrow_mut().push_back(Reply::Now(reply));
        self
    }

    pub fn with_search(self, reply: Result<Vec<MarketItem>, ClientError>) -> Self {
        self.search_replies.borrow_mut().push_back(Reply::Now(reply));
        self
    }

    pub fn with_search_reply(self, reply: Reply<Vec<MarketItem>>) -> Self {
        self.search_replies.borrow_mut().push_back(reply);
        self
    }

    /// Every query string passed to `search`, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    pub fn genre_calls(&self) -> usize {
        self.genre_calls.get()
    }

    async fn resolve<T>(reply: Option<Reply<T>>) -> Result<T, ClientError> {
        match reply {
            Some(Reply::Now(result)) => result,
            Some(Reply::Later(rx)) => rx.await.unwrap_or(Err(ClientError::Status(499))),
            None => Err(ClientError::Status(503)),
        }
    }
}

impl MarketApi for ScriptedMarketApi {
    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        self.genre_calls.set(self.genre_calls.get() + 1);
        let reply = self.genre_replies.borrow_mut().pop_front();
        Self::resolve(reply).await
    }

    async fn search(&self, query: &str) -> Result<Vec<MarketItem>, ClientError> {
        self.queries.borrow_mut().push(query.to_string());
        let reply = self.search_replies.borrow_mut().pop_front();
        Self::resolve(reply).await
    }
}

/// Wallet provider with fixed answers
pub struct ScriptedWallet {
    pub accounts: Result<Vec<String>, WalletError>,
    pub address: Result<String, WalletError>,
    pub requests: Cell<usize>,
}

impl ScriptedWallet {
    pub fn with_account(address: &str) -> Self {
        Self {
            accounts: Ok(vec![address.to_string()]),
            address: Ok(address.to_string()),
            requests: Cell::new(0),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            accounts: Err(WalletError::Rejected(reason.to_string())),
            address: Err(WalletError::Rejected(reason.to_string())),
            requests: Cell::new(0),
        }
    }

    pub fn without_accounts() -> Self {
        Self {
            accounts: Ok(vec![]),
            address: Err(WalletError::NoAccounts),
            requests: Cell::new(0),
        }
    }
}

impl WalletProvider for ScriptedWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.requests.set(self.requests.get() + 1);
        self.accounts.clone()
    }

    async fn get_address(&self) -> Result<String, WalletError> {
        self.address.clone()
    }
}

/// Let other futures on the same task make progress until `done` holds
pub async fn yield_until(mut done: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}

#[cfg(feature = "proxy")]
pub use http::*;

#[cfg(feature = "proxy")]
mod http {
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use nft_storefront::fixtures::catalog;
    use nft_storefront::web_app::api::{routes, Backend};
    use serde_json::{json, Value};

    /// Keyword that makes the fake backend fail a search
    pub const FAILING_KEYWORD: &str = "boom";

    /// Body served verbatim for `/api/v1/nfts/detail/raw`: keys out of
    /// alphabetical order and a price beyond u64
    pub const RAW_LISTING: &str =
        r#"[{"name":"Track","id":"n1","price":100000000000000000000,"chain_id":1}]"#;

    /// Fake of the external backend
    ///
    /// Known routes answer with catalog data; search honours `q` and `genre`.
    /// Every other request is echoed back as `{method, path, query, body}`.
    async fn fake_upstream(req: HttpRequest, body: web::Bytes) -> HttpResponse {
        let method = req.method().as_str().to_string();
        let path = req.path().to_string();
        let query = req.query_string().to_string();
        let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

        match (method.as_str(), path.as_str()) {
            ("GET", "/api/v1/genres") => HttpResponse::Ok().json(catalog::sample_genres()),
            ("GET", "/api/v1/nfts/search") => search(&query),
            ("GET", "/api/v1/nfts/detail/not-json") => {
                HttpResponse::Ok().content_type("text/html").body("<html>oops</html>")
            }
            ("GET", "/api/v1/nfts/detail/empty") => HttpResponse::Ok().finish(),
            ("GET", "/api/v1/nfts/detail/raw") => {
                HttpResponse::Ok().content_type("application/json").body(RAW_LISTING)
            }
            ("GET", "/api/v1/nfts/detail/missing") => HttpResponse::NotFound().json(json!({"message": "not found"})),
            ("POST", "/api/v1/users") if body["wallet_address"] == "0xduplicate" => {
                HttpResponse::Ok().json("{\"error_type\":\"duplicate wallet\"}")
            }
            _ => HttpResponse::Ok().json(json!({
                "method": method,
                "path": path,
                "query": query,
                "body": body,
            })),
        }
    }

    fn search(query: &str) -> HttpResponse {
        let mut keyword = String::new();
        let mut genre = String::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => keyword = value.to_lowercase(),
                "genre" => genre = value.into_owned(),
                _ => {}
            }
        }

        if keyword == FAILING_KEYWORD {
            return HttpResponse::InternalServerError().body("search index unavailable");
        }

        let items: Vec<Value> = match catalog::sample_items_json() {
            Value::Array(items) => items,
            _ => vec![],
        };
        let matches: Vec<Value> = items
            .into_iter()
            .filter(|item| genre.is_empty() || item["genre_id"] == genre.as_str())
            .filter(|item| {
                keyword.is_empty()
                    || item["name"]
                        .as_str()
                        .is_some_and(|name| name.to_lowercase().contains(&keyword))
            })
            .collect();
        HttpResponse::Ok().json(matches)
    }

    /// Start the fake backend; returns its base URL
    pub fn spawn_fake_backend() -> std::io::Result<String> {
        let server = HttpServer::new(|| App::new().default_service(web::to(fake_upstream)))
            .workers(1)
            .bind(("127.0.0.1", 0))?;
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Ok(format!("http://{}", addr))
    }

    /// Start the proxy routes in front of `backend_url`; returns its base URL
    pub fn spawn_proxy(backend_url: &str) -> std::io::Result<String> {
        let backend = Backend::new(backend_url).map_err(std::io::Error::other)?;
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(backend.clone()))
                .configure(routes::configure)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Ok(format!("http://{}", addr))
    }
}
