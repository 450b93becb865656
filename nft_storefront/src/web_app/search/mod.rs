// web_app/search/mod.rs - Client-side search core
//
// - query.rs: criteria -> canonical query string (pure)
// - session.rs: session state machine and the executor driving it

pub mod query;
pub mod session;

pub use query::build_query;
pub use session::{
    finish_search, run_genre_load, run_search, start_search, SearchPhase, SearchSession, SearchSessionState,
    SearchTicket, SessionStore, SEARCH_FAILED_MESSAGE,
};
