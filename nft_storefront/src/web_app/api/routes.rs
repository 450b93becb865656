// web_app/api/routes.rs - Proxy route handlers
//
// Each handler maps one storefront endpoint onto one backend endpoint and
// relays the JSON answer as received. Handlers are bridges, not business
// logic: no validation beyond what is needed to build the upstream URL.

use actix_web::http::header::ContentType;
use actix_web::web::Bytes;
use actix_web::{web, HttpRequest, HttpResponse};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use super::backend::{reject_error_payload, Backend, ProxyError};

type ProxyResult = Result<HttpResponse, ProxyError>;

/// Register every proxy route under `/api`
///
/// The app must provide `web::Data<Backend>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(query_config())
            // Master data
            .service(
                web::resource("/master/genres")
                    .route(web::get().to(list_genres))
                    .route(web::post().to(create_genre)),
            )
            .service(
                web::resource("/master/genres/{id}")
                    .route(web::get().to(get_genre))
                    .route(web::put().to(update_genre))
                    .route(web::delete().to(delete_genre)),
            )
            .service(
                web::resource("/master/businesses")
                    .route(web::get().to(list_businesses))
                    .route(web::post().to(create_business)),
            )
            .service(
                web::resource("/master/businesses/{id}")
                    .route(web::get().to(get_business))
                    .route(web::put().to(update_business))
                    .route(web::delete().to(delete_business)),
            )
            // NFTs; fixed paths first so `{wallet}` does not swallow them
            .service(web::resource("/nft/search").route(web::get().to(search_nfts)))
            .service(web::resource("/nft/detail/{transaction_id}").route(web::get().to(nft_detail)))
            .service(
                web::resource("/nft")
                    .route(web::get().to(list_nfts))
                    .route(web::post().to(create_nft)),
            )
            .service(web::resource("/nft/{wallet}").route(web::get().to(nfts_by_wallet)))
            // Users
            .service(
                web::resource("/users")
                    .route(web::get().to(user_by_wallet))
                    .route(web::post().to(create_user))
                    .route(web::put().to(update_user)),
            ),
    );
}

/// Malformed request bodies get the same 500 JSON error as upstream failures
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ProxyError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ProxyError::BadRequest(err.to_string()).into())
}

async fn relay(
    backend: &Backend,
    method: Method,
    segments: &[&str],
    query: Option<&str>,
    body: Option<&Value>,
) -> ProxyResult {
    let body = backend.forward(method, segments, query, body).await?;
    Ok(json_response(body))
}

fn json_response(body: Bytes) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::json()).body(body)
}

// --- Genres ---

async fn list_genres(backend: web::Data<Backend>) -> ProxyResult {
    relay(&backend, Method::GET, &["genres"], None, None).await
}

async fn create_genre(backend: web::Data<Backend>, body: web::Json<Value>) -> ProxyResult {
    let body = body.into_inner();
    relay(&backend, Method::POST, &["genres"], None, Some(&body)).await
}

async fn get_genre(backend: web::Data<Backend>, id: web::Path<String>) -> ProxyResult {
    let id = id.into_inner();
    relay(&backend, Method::GET, &["genres", id.as_str()], None, None).await
}

async fn update_genre(
    backend: web::Data<Backend>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> ProxyResult {
    let id = id.into_inner();
    let body = body.into_inner();
    relay(&backend, Method::PUT, &["genres", id.as_str()], None, Some(&body)).await
}

async fn delete_genre(backend: web::Data<Backend>, id: web::Path<String>) -> ProxyResult {
    let id = id.into_inner();
    relay(&backend, Method::DELETE, &["genres", id.as_str()], None, None).await
}

// --- Businesses ---

async fn list_businesses(backend: web::Data<Backend>) -> ProxyResult {
    relay(&backend, Method::GET, &["businesses"], None, None).await
}

async fn create_business(backend: web::Data<Backend>, body: web::Json<Value>) -> ProxyResult {
    let body = body.into_inner();
    relay(&backend, Method::POST, &["businesses"], None, Some(&body)).await
}

async fn get_business(backend: web::Data<Backend>, id: web::Path<String>) -> ProxyResult {
    let id = id.into_inner();
    relay(&backend, Method::GET, &["businesses", id.as_str()], None, None).await
}

async fn update_business(
    backend: web::Data<Backend>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> ProxyResult {
    let id = id.into_inner();
    let body = body.into_inner();
    relay(&backend, Method::PUT, &["businesses", id.as_str()], None, Some(&body)).await
}

async fn delete_business(backend: web::Data<Backend>, id: web::Path<String>) -> ProxyResult {
    let id = id.into_inner();
    relay(&backend, Method::DELETE, &["businesses", id.as_str()], None, None).await
}

// --- NFTs ---

/// Search: the query string is forwarded exactly as received
async fn search_nfts(backend: web::Data<Backend>, req: HttpRequest) -> ProxyResult {
    let query = req.query_string();
    tracing::info!("NFT search: '{}'", query);
    relay(&backend, Method::GET, &["nfts", "search"], Some(query), None).await
}

async fn nft_detail(backend: web::Data<Backend>, transaction_id: web::Path<String>) -> ProxyResult {
    let transaction_id = transaction_id.into_inner();
    relay(&backend, Method::GET, &["nfts", "detail", transaction_id.as_str()], None, None).await
}

async fn list_nfts(backend: web::Data<Backend>) -> ProxyResult {
    relay(&backend, Method::GET, &["nfts"], None, None).await
}

async fn create_nft(backend: web::Data<Backend>, body: web::Json<Value>) -> ProxyResult {
    let body = body.into_inner();
    relay(&backend, Method::POST, &["nfts"], None, Some(&body)).await
}

async fn nfts_by_wallet(backend: web::Data<Backend>, wallet: web::Path<String>) -> ProxyResult {
    let wallet = wallet.into_inner();
    relay(&backend, Method::GET, &["nfts", "wallet", wallet.as_str()], None, None).await
}

// --- Users ---

#[derive(Debug, Deserialize)]
struct WalletQuery {
    wallet: Option<String>,
}

async fn user_by_wallet(backend: web::Data<Backend>, query: web::Query<WalletQuery>) -> ProxyResult {
    let wallet = query
        .into_inner()
        .wallet
        .filter(|wallet| !wallet.is_empty())
        .ok_or_else(|| ProxyError::BadRequest("missing wallet parameter".to_string()))?;
    relay(&backend, Method::GET, &["users", "wallet", wallet.as_str()], None, None).await
}

async fn create_user(backend: web::Data<Backend>, body: web::Json<Value>) -> ProxyResult {
    let body = body.into_inner();
    let relayed = backend.forward(Method::POST, &["users"], None, Some(&body)).await?;
    Ok(json_response(reject_error_payload(relayed)?))
}

/// Update: the user id travels in the body, not the path
async fn update_user(backend: web::Data<Backend>, body: web::Json<Value>) -> ProxyResult {
    let body = body.into_inner();
    let id = match body.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(ProxyError::BadRequest("missing user id".to_string())),
    };
    relay(&backend, Method::PUT, &["users", id.as_str()], None, Some(&body)).await
}
