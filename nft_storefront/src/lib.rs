// lib.rs - Root module for the nft_storefront library
//
// The search core (model, query builder, session state machine, HTTP client)
// compiles everywhere. The proxy routes need the `proxy` feature and the
// Leptos pages need `ssr` or `hydrate`.

/// Sample catalog data shared by unit and integration tests
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrates the server-rendered search page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
