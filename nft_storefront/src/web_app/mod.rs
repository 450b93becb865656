// web_app/mod.rs - Root module for the storefront web application
//
// Architecture:
// - model/: Shared data types (criteria, genres, market items)
// - search/: Query builder and the search session state machine
// - client.rs: MarketApi trait and its HTTP implementation
// - wallet.rs: Wallet connection state over an injected provider
// - api/: Proxy routes relaying to the external backend (proxy only)
// - hooks/: Leptos presentation binding (SSR and hydrate)
// - components/, pages/, app.rs: Search page rendering (SSR and hydrate)

pub mod model;
pub mod search;
pub mod client;
pub mod wallet;

// Proxy routes and backend relay (server only)
#[cfg(feature = "proxy")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod hooks;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
