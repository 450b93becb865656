// web_app/search/session.rs - Search session state machine and executor
//
// `SearchSessionState` holds everything one search UI instance owns and the
// transitions between idle, searching, succeeded and failed. The transitions
// are synchronous; the executor functions below drive them around the network
// calls over any `SessionStore`, so `SearchSession` and the Leptos hook run the
// same code.

use std::cell::RefCell;

use crate::web_app::client::{ClientError, MarketApi};
use crate::web_app::model::{Genre, MarketItem, SearchCriteria, SortMode};
use crate::web_app::search::query::build_query;

/// Message shown when a search request fails for any reason
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch search results.";

/// Where the session is in its search lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Succeeded,
    Failed,
}

/// A search request that has been started but not yet completed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub request_id: u64,
    pub query: String,
}

/// State owned by one search UI instance, from mount to unmount
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSessionState {
    pub criteria: SearchCriteria,
    pub genres: Vec<Genre>,
    pub results: Vec<MarketItem>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    latest_request: u64,
    genres_requested: bool,
}

impl SearchSessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        if !self.has_searched {
            SearchPhase::Idle
        } else if self.is_loading {
            SearchPhase::Searching
        } else if self.error.is_some() {
            SearchPhase::Failed
        } else {
            SearchPhase::Succeeded
        }
    }

    /// Id of the most recently started search, 0 before the first one
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Start a search: flags are set before any network activity
    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest_request += 1;
        self.is_loading = true;
        self.error = None;
        self.has_searched = true;

        SearchTicket {
            request_id: self.latest_request,
            query: build_query(&self.criteria),
        }
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.request_id == self.latest_request
    }

    /// Apply the outcome of a search request
    ///
    /// Returns `false` and leaves the state untouched when a newer search has
    /// been started since `ticket` was issued.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<MarketItem>, ClientError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(items) => {
                self.results = items;
            }
            Err(_) => {
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
                self.results.clear();
            }
        }
        self.is_loading = false;
        true
    }

    /// Replace the genre list with what the server returned, in server order
    pub fn apply_genres(&mut self, genres: Vec<Genre>) {
        self.genres = genres;
    }

    /// Mark the genre directory as requested; true only the first time
    pub fn claim_genre_load(&mut self) -> bool {
        !std::mem::replace(&mut self.genres_requested, true)
    }
}

/// Somewhere a `SearchSessionState` lives
pub trait SessionStore {
    /// Apply `f` to the state; `None` once the state is gone
    fn update_state<R>(&self, f: impl FnOnce(&mut SearchSessionState) -> R) -> Option<R>;
}

impl SessionStore for RefCell<SearchSessionState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut SearchSessionState) -> R) -> Option<R> {
        let mut state = self.borrow_mut();
        Some(f(&mut *state))
    }
}

/// Load the genre directory into `store`
///
/// Only the first call per state issues a request; returns whether this call
/// did. Failures are logged and leave both `genres` and `error` untouched.
pub async fn run_genre_load<A, S>(api: &A, store: &S) -> bool
where
    A: MarketApi,
    S: SessionStore,
{
    if store.update_state(SearchSessionState::claim_genre_load) != Some(true) {
        return false;
    }

    match api.fetch_genres().await {
        Ok(genres) => {
            tracing::debug!("Loaded {} genres", genres.len());
            store.update_state(|s| s.apply_genres(genres));
        }
        Err(e) => tracing::warn!("Failed to load genres: {}", e),
    }
    true
}

/// Synchronous half of a search: set the flags and issue a ticket
pub fn start_search<S: SessionStore>(store: &S) -> Option<SearchTicket> {
    let ticket = store.update_state(SearchSessionState::begin_search)?;
    tracing::info!("Search request #{}: {}", ticket.request_id, ticket.query);
    Some(ticket)
}

/// Network half of a search: fetch and apply the outcome
///
/// Returns whether the response was applied; it is dropped when a newer
/// search has started or the state is gone.
pub async fn finish_search<A, S>(api: &A, store: &S, ticket: SearchTicket) -> bool
where
    A: MarketApi,
    S: SessionStore,
{
    let outcome = api.search(&ticket.query).await;
    match &outcome {
        Ok(items) => tracing::info!("Search #{} returned {} items", ticket.request_id, items.len()),
        Err(e) => tracing::error!("Search #{} failed: {}", ticket.request_id, e),
    }

    let applied = store.update_state(|s| s.complete_search(&ticket, outcome)) == Some(true);
    if !applied {
        tracing::debug!("Discarding response for search #{}", ticket.request_id);
    }
    applied
}

/// Run one search with the current criteria of `store`
pub async fn run_search<A, S>(api: &A, store: &S) -> bool
where
    A: MarketApi,
    S: SessionStore,
{
    match start_search(store) {
        Some(ticket) => finish_search(api, store, ticket).await,
        None => false,
    }
}

/// Search session driving a `MarketApi`
///
/// Single-threaded: state lives in a `RefCell` and is never borrowed across
/// an await point, so overlapping `search()` calls on one task are fine.
pub struct SearchSession<A> {
    api: A,
    state: RefCell<SearchSessionState>,
}

impl<A: MarketApi> SearchSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(SearchSessionState::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the whole session state
    pub fn state(&self) -> SearchSessionState {
        self.state.borrow().clone()
    }

    pub fn criteria(&self) -> SearchCriteria {
        self.state.borrow().criteria.clone()
    }

    pub fn genres(&self) -> Vec<Genre> {
        self.state.borrow().genres.clone()
    }

    pub fn results(&self) -> Vec<MarketItem> {
        self.state.borrow().results.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn has_searched(&self) -> bool {
        self.state.borrow().has_searched
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.borrow().phase()
    }

    pub fn set_keyword(&self, keyword: impl Into<String>) {
        self.state.borrow_mut().criteria.keyword = keyword.into();
    }

    pub fn set_genre(&self, genre_id: impl Into<String>) {
        self.state.borrow_mut().criteria.genre_id = genre_id.into();
    }

    pub fn set_min_price(&self, min_price: impl Into<String>) {
        self.state.borrow_mut().criteria.min_price = min_price.into();
    }

    pub fn set_max_price(&self, max_price: impl Into<String>) {
        self.state.borrow_mut().criteria.max_price = max_price.into();
    }

    pub fn set_sort(&self, sort: SortMode) {
        self.state.borrow_mut().criteria.sort = sort;
    }

    /// Load the genre directory; only the first call issues a request
    pub async fn load_genres(&self) {
        run_genre_load(&self.api, &self.state).await;
    }

    /// Run one search with the current criteria
    ///
    /// Returns whether the response was applied.
    pub async fn search(&self) -> bool {
        run_search(&self.api, &self.state).await
    }
}
