// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Small shared pieces (Loading, ErrorDisplay, EmptyState)
// - search.rs: Search controls bound to the search session
// - nft.rs: NFT cards and the results grid

pub mod common;
pub mod nft;
pub mod search;

pub use common::*;
pub use nft::*;
pub use search::*;
