// web_app/pages/mod.rs - Page components module
//
// - SearchPage: NFT catalog search

pub mod search;

pub use search::SearchPage;
