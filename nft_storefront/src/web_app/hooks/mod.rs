// web_app/hooks/mod.rs - Leptos hooks binding the search core to the UI

pub mod use_search;

pub use use_search::{use_search, UseSearchReturn};
