// web_app/api/config.rs - Proxy server configuration
//
// Values come from the process environment, with `.env` loaded first.

use std::env;

pub const DEFAULT_BACKEND_HOST: &str = "http://backend:1323";
pub const DEFAULT_STOREFRONT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Base URL of the external backend, e.g. `http://backend:1323`
    pub backend_host: String,
    /// Bind address for the API-only server (SSR uses the Leptos site address)
    pub bind_addr: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            backend_host: DEFAULT_BACKEND_HOST.to_string(),
            bind_addr: DEFAULT_STOREFRONT_ADDR.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Load `.env` and read the configuration from the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            backend_host: non_empty("BACKEND_HOST").unwrap_or(defaults.backend_host),
            bind_addr: non_empty("STOREFRONT_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}
