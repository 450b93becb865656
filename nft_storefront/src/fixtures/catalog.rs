// fixtures/catalog.rs
//
// A small music NFT catalog: the genre master data and a handful of listings
// shaped like the backend's search response.

use serde_json::{json, Value};

use crate::web_app::model::{Genre, MarketItem};

/// Genre list in the order the backend returns it
pub fn sample_genres() -> Vec<Genre> {
    vec![
        Genre { id: "1".to_string(), name: "Rock".to_string() },
        Genre { id: "2".to_string(), name: "Jazz".to_string() },
        Genre { id: "3".to_string(), name: "Electronic".to_string() },
    ]
}

/// Raw search response body, as the backend sends it
pub fn sample_items_json() -> Value {
    json!([
        {
            "id": "nft-001",
            "user_id": "user-01",
            "chain_id": 11155111,
            "tokenId": 1,
            "name": "Awesome Sunrise",
            "description": "An awesome guitar track recorded at dawn.",
            "file_type": "audio",
            "image_url": "https://ipfs.example/cover-001.png",
            "audio_url": "https://ipfs.example/track-001.mp3",
            "video_url": "",
            "genre_id": "1",
            "genre_name": "Rock",
            "creator_address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "price": "150",
            "sale": true
        },
        {
            "id": "nft-002",
            "user_id": "user-02",
            "chain_id": 11155111,
            "tokenId": 2,
            "name": "Blue Hour",
            "description": "Late night trio session.",
            "file_type": "audio",
            "image_url": "https://ipfs.example/cover-002.png",
            "audio_url": "https://ipfs.example/track-002.mp3",
            "video_url": "",
            "genre_id": "2",
            "genre_name": "Jazz",
            "creator_address": "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9",
            "price": "90",
            "sale": true
        }
    ])
}

/// The sample response decoded into market items
pub fn sample_items() -> Vec<MarketItem> {
    serde_json::from_value(sample_items_json()).unwrap_or_default()
}
