// tests/search_session_tests.rs - Search session state machine
//
// Drives SearchSession against a scripted MarketApi: flag transitions,
// failure handling, the genre loader and overlapping searches.

mod common;

use std::cell::Cell;

use common::{deferred, yield_until, ScriptedMarketApi};
use nft_storefront::fixtures::catalog;
use nft_storefront::web_app::client::ClientError;
use nft_storefront::web_app::model::SortMode;
use nft_storefront::web_app::search::{SearchPhase, SearchSession, SEARCH_FAILED_MESSAGE};

#[tokio::test]
async fn test_keyword_search_renders_items_unchanged() {
    let session = SearchSession::new(ScriptedMarketApi::new().with_search(Ok(catalog::sample_items())));
    session.set_keyword("Awesome");

    assert!(session.search().await);

    assert_eq!(session.api().queries(), ["q=Awesome&sort=newest"]);
    assert_eq!(session.results(), catalog::sample_items());
    assert_eq!(
        serde_json::to_value(session.results()).unwrap(),
        catalog::sample_items_json()
    );
    assert_eq!(session.phase(), SearchPhase::Succeeded);
}

#[tokio::test]
async fn test_setters_do_not_hit_the_network() {
    let session = SearchSession::new(ScriptedMarketApi::new());

    session.set_keyword("night");
    session.set_genre("2");
    session.set_min_price("1");
    session.set_max_price("5");
    session.set_sort(SortMode::PriceDesc);

    assert!(session.api().queries().is_empty());
    assert_eq!(session.api().genre_calls(), 0);
    assert!(!session.has_searched());
    assert_eq!(session.phase(), SearchPhase::Idle);
}

#[tokio::test]
async fn test_each_search_sends_one_request_with_current_criteria() {
    let api = ScriptedMarketApi::new()
        .with_search(Ok(vec![]))
        .with_search(Ok(vec![]));
    let session = SearchSession::new(api);

    session.set_genre("1");
    session.search().await;
    session.set_sort(SortMode::PriceAsc);
    session.search().await;

    assert_eq!(
        session.api().queries(),
        ["genre=1&sort=newest", "genre=1&sort=price_asc"]
    );
}

#[tokio::test]
async fn test_has_searched_survives_failure() {
    let api = ScriptedMarketApi::new()
        .with_search(Ok(catalog::sample_items()))
        .with_search(Err(ClientError::Status(500)));
    let session = SearchSession::new(api);

    session.search().await;
    assert!(session.has_searched());

    session.search().await;
    assert!(session.has_searched());
    assert_eq!(session.phase(), SearchPhase::Failed);
}

#[tokio::test]
async fn test_empty_success_keeps_error_clear() {
    let session = SearchSession::new(ScriptedMarketApi::new().with_search(Ok(vec![])));

    session.search().await;

    assert!(session.results().is_empty());
    assert_eq!(session.error(), None);
    assert!(!session.is_loading());
    assert_eq!(session.phase(), SearchPhase::Succeeded);
}

#[tokio::test]
async fn test_failure_clears_previous_results() {
    let api = ScriptedMarketApi::new()
        .with_search(Ok(catalog::sample_items()))
        .with_search(Err(ClientError::Decode("expected value".to_string())));
    let session = SearchSession::new(api);

    session.search().await;
    assert_eq!(session.results().len(), 2);

    session.search().await;
    assert!(session.results().is_empty());
    assert_eq!(session.error().as_deref(), Some(SEARCH_FAILED_MESSAGE));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_new_search_clears_error_before_the_response() {
    let (pending, release) = deferred();
    let api = ScriptedMarketApi::new()
        .with_search(Err(ClientError::Status(502)))
        .with_search_reply(pending);
    let session = SearchSession::new(api);

    session.search().await;
    assert!(session.error().is_some());

    let observed = Cell::new(false);
    let (applied, ()) = tokio::join!(session.search(), async {
        yield_until(|| session.api().queries().len() == 2).await;
        assert!(session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.phase(), SearchPhase::Searching);
        observed.set(true);
        release.send(Ok(catalog::sample_items())).ok();
    });

    assert!(observed.get());
    assert!(applied);
    assert_eq!(session.results().len(), 2);
}

#[tokio::test]
async fn test_genres_load_once_in_server_order() {
    let session = SearchSession::new(ScriptedMarketApi::new().with_genres(Ok(catalog::sample_genres())));

    session.load_genres().await;
    session.load_genres().await;

    assert_eq!(session.api().genre_calls(), 1);
    assert_eq!(session.genres(), catalog::sample_genres());
}

#[tokio::test]
async fn test_genre_failure_is_silent() {
    let session = SearchSession::new(ScriptedMarketApi::new().with_genres(Err(ClientError::Status(500))));

    session.load_genres().await;

    assert!(session.genres().is_empty());
    assert_eq!(session.error(), None);
    assert_eq!(session.phase(), SearchPhase::Idle);
}

#[tokio::test]
async fn test_stale_response_does_not_overwrite_newer_search() {
    let (slow, release_slow) = deferred();
    let (fast, release_fast) = deferred();
    let api = ScriptedMarketApi::new()
        .with_search_reply(slow)
        .with_search_reply(fast);
    let session = SearchSession::new(api);

    let newest = catalog::sample_items()[1..].to_vec();
    let first_done = Cell::new(false);

    session.set_keyword("old");
    let first = async {
        let applied = session.search().await;
        first_done.set(true);
        applied
    };
    let second = async {
        yield_until(|| session.api().queries().len() == 1).await;
        session.set_keyword("new");
        session.search().await
    };
    let driver = async {
        yield_until(|| session.api().queries().len() == 2).await;

        // The older request resolves first and must be ignored
        release_slow.send(Ok(catalog::sample_items())).ok();
        yield_until(|| first_done.get()).await;
        assert!(session.is_loading());
        assert!(session.results().is_empty());

        release_fast.send(Ok(newest.clone())).ok();
    };

    let (first_applied, second_applied, ()) = tokio::join!(first, second, driver);

    assert!(!first_applied);
    assert!(second_applied);
    assert_eq!(session.api().queries(), ["q=old&sort=newest", "q=new&sort=newest"]);
    assert_eq!(session.results(), newest);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_stale_failure_does_not_surface_error() {
    let (slow, release_slow) = deferred();
    let api = ScriptedMarketApi::new()
        .with_search_reply(slow)
        .with_search(Ok(catalog::sample_items()));
    let session = SearchSession::new(api);

    let first = session.search();
    let second = async {
        yield_until(|| session.api().queries().len() == 1).await;
        let applied = session.search().await;
        release_slow.send(Err(ClientError::Status(504))).ok();
        applied
    };

    let (first_applied, second_applied) = tokio::join!(first, second);

    assert!(!first_applied);
    assert!(second_applied);
    assert_eq!(session.error(), None);
    assert_eq!(session.results().len(), 2);
}
