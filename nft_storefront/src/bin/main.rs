// Storefront web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Proxy routes relaying /api/* to the external backend
// - Leptos SSR pages and static files (with the `ssr` feature)

#[cfg(feature = "proxy")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use nft_storefront::web_app::api::{Backend, ProxyConfig};
    use tracing_subscriber::EnvFilter;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables
    let config = ProxyConfig::from_env();
    let backend = Backend::new(&config.backend_host).map_err(std::io::Error::other)?;

    tracing::info!("Relaying /api requests to {}", backend.host());

    serve(config, backend).await
}

#[cfg(feature = "ssr")]
async fn serve(
    _config: nft_storefront::web_app::api::ProxyConfig,
    backend: nft_storefront::web_app::api::Backend,
) -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;
    use nft_storefront::web_app::api::routes;
    use nft_storefront::web_app::app::App as WebApp;

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(std::io::Error::other)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Shared upstream client for every proxy route
            .app_data(web::Data::new(backend.clone()))
            .configure(routes::configure)
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

/// API-only server: the proxy routes without rendered pages
#[cfg(all(feature = "proxy", not(feature = "ssr")))]
async fn serve(
    config: nft_storefront::web_app::api::ProxyConfig,
    backend: nft_storefront::web_app::api::Backend,
) -> std::io::Result<()> {
    use actix_web::{web, App, HttpServer};
    use nft_storefront::web_app::api::routes;

    tracing::info!("Starting API server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(backend.clone()))
            .configure(routes::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "proxy"))]
fn main() {
    panic!("This binary requires the 'proxy' feature. Run with: cargo run --features proxy");
}
