// Command-line search against a running storefront
//
// Runs one search session against the proxy routes and prints what the
// search page would show. Criteria are given as key=value arguments:
//
//   search_cli q=Awesome genre=1 min_price=100 max_price=200 sort=price_asc

use anyhow::{bail, Context, Result};
use nft_storefront::web_app::client::{HttpMarketApi, DEFAULT_ORIGIN};
use nft_storefront::web_app::model::SortMode;
use nft_storefront::web_app::search::SearchSession;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let origin = std::env::var("STOREFRONT_URL").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

    println!("Probing storefront at {}...", origin);

    let session = SearchSession::new(HttpMarketApi::new(origin));

    for arg in std::env::args().skip(1) {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got '{}'", arg);
        };
        match key {
            "q" => session.set_keyword(value),
            "genre" => session.set_genre(value),
            "min_price" => session.set_min_price(value),
            "max_price" => session.set_max_price(value),
            "sort" => session.set_sort(
                value
                    .parse::<SortMode>()
                    .context("sort must be one of newest, price_asc, price_desc")?,
            ),
            other => bail!("unknown criteria '{}'", other),
        }
    }

    session.load_genres().await;
    let genres = session.genres();
    if genres.is_empty() {
        println!("✗ No genres loaded");
    } else {
        println!("✓ {} genres:", genres.len());
        for genre in &genres {
            println!("    {:>4}  {}", genre.id, genre.name);
        }
    }

    session.search().await;
    if let Some(error) = session.error() {
        println!("✗ {}", error);
        return Ok(());
    }

    let results = session.results();
    println!("✓ {} results", results.len());
    for item in &results {
        println!(
            "    {}  {}  (price: {}, genre: {})",
            item.id().unwrap_or_default(),
            item.name().unwrap_or_else(|| "(untitled)".to_string()),
            item.price().unwrap_or_else(|| "-".to_string()),
            item.genre_name().unwrap_or_else(|| "-".to_string()),
        );
    }

    Ok(())
}
