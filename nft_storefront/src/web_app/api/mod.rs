// web_app/api/mod.rs - Proxy routes to the external backend
//
// - config.rs: environment-driven settings
// - backend.rs: the relay (reqwest) and its error type
// - routes.rs: actix-web handlers, one per proxied endpoint

pub mod config;
pub mod backend;
pub mod routes;

pub use backend::{Backend, ProxyError};
pub use config::ProxyConfig;
