// web_app/hooks/use_search.rs - Reactive binding for the search session
//
// Keeps `SearchSessionState` in a signal and runs the shared search executor
// against it. Setters only touch local state; the network is hit on mount
// (genres) and on `search` only.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::client::MarketApi;
use crate::web_app::model::{Genre, MarketItem, SearchCriteria, SortMode};
use crate::web_app::search::{
    finish_search, run_genre_load, start_search, SearchPhase, SearchSessionState, SessionStore,
};

/// A disposed signal reports `None`, so late responses are dropped
impl SessionStore for RwSignal<SearchSessionState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut SearchSessionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Return type for use_search hook
#[derive(Clone, Copy)]
pub struct UseSearchReturn {
    pub criteria: Signal<SearchCriteria>,
    pub genres: Signal<Vec<Genre>>,
    pub results: Signal<Vec<MarketItem>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub has_searched: Signal<bool>,
    pub phase: Signal<SearchPhase>,
    pub set_query: Callback<String>,
    pub set_genre: Callback<String>,
    pub set_min_price: Callback<String>,
    pub set_max_price: Callback<String>,
    pub set_sort: Callback<SortMode>,
    /// Load the genre directory; runs on mount, later calls are no-ops
    pub load_genres: Callback<()>,
    pub search: Callback<()>,
}

/// Hook for the NFT search page
///
/// # Example
/// ```rust,ignore
/// let search = use_search(HttpMarketApi::same_origin());
///
/// view! {
///     <input
///         prop:value=move || search.criteria.get().keyword
///         on:input=move |ev| search.set_query.run(event_target_value(&ev))
///     />
///     <button on:click=move |_| search.search.run(())>"Search"</button>
/// }
/// ```
pub fn use_search<A>(api: A) -> UseSearchReturn
where
    A: MarketApi + 'static,
{
    let state = RwSignal::new(SearchSessionState::new());
    let api = StoredValue::new_local(Rc::new(api));

    let load_genres = Callback::new(move |()| {
        let api = api.get_value();
        spawn_local(async move {
            run_genre_load(&api, &state).await;
        });
    });

    // Flags flip synchronously; only the request itself is spawned
    let search = Callback::new(move |()| {
        let Some(ticket) = start_search(&state) else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            finish_search(&api, &state, ticket).await;
        });
    });

    Effect::new(move || load_genres.run(()));

    UseSearchReturn {
        criteria: Signal::derive(move || state.with(|s| s.criteria.clone())),
        genres: Signal::derive(move || state.with(|s| s.genres.clone())),
        results: Signal::derive(move || state.with(|s| s.results.clone())),
        is_loading: Signal::derive(move || state.with(|s| s.is_loading)),
        error: Signal::derive(move || state.with(|s| s.error.clone())),
        has_searched: Signal::derive(move || state.with(|s| s.has_searched)),
        phase: Signal::derive(move || state.with(|s| s.phase())),
        set_query: Callback::new(move |value: String| state.update(|s| s.criteria.keyword = value)),
        set_genre: Callback::new(move |value: String| state.update(|s| s.criteria.genre_id = value)),
        set_min_price: Callback::new(move |value: String| state.update(|s| s.criteria.min_price = value)),
        set_max_price: Callback::new(move |value: String| state.update(|s| s.criteria.max_price = value)),
        set_sort: Callback::new(move |value: SortMode| state.update(|s| s.criteria.sort = value)),
        load_genres,
        search,
    }
}
