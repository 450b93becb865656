// web_app/model/mod.rs - Shared data models for client and server
//
// These types travel between the search page, the search session and the
// proxy routes. Market items are kept opaque: the storefront renders them but
// never interprets them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// Result ordering requested from the backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::PriceAsc, SortMode::PriceDesc];

    /// Value of the `sort` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Newest => write!(f, "Newest"),
            SortMode::PriceAsc => write!(f, "Price: Low to High"),
            SortMode::PriceDesc => write!(f, "Price: High to Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort mode: {0}")]
pub struct SortModeParseError(pub String);

impl FromStr for SortMode {
    type Err = SortModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_param() == s)
            .ok_or_else(|| SortModeParseError(s.to_string()))
    }
}

/// Search filters edited by the user
///
/// Every text field uses the empty string for "not set". Prices stay exactly
/// as typed; validating them is the backend's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub keyword: String,
    pub genre_id: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: SortMode,
}

/// Music genre from the master data
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Marketplace listing as returned by the backend
///
/// The JSON object is kept as received so it can be relayed and rendered
/// unchanged. Accessors are conveniences for rendering only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketItem(Map<String, Value>);

impl MarketItem {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field rendered as text; strings are returned as-is, numbers formatted
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    pub fn name(&self) -> Option<String> {
        self.text("name")
    }

    pub fn description(&self) -> Option<String> {
        self.text("description")
    }

    /// Description cut to `max_chars` characters, with "..." when shortened
    pub fn description_preview(&self, max_chars: usize) -> Option<String> {
        let description = self.description()?;
        if description.chars().count() > max_chars {
            let cut: String = description.chars().take(max_chars).collect();
            Some(format!("{}...", cut))
        } else {
            Some(description)
        }
    }

    /// Listing price; the backend sends it either as a string or a number
    pub fn price(&self) -> Option<String> {
        self.text("price")
    }

    pub fn image_url(&self) -> Option<String> {
        self.text("image_url").filter(|url| !url.is_empty())
    }

    pub fn audio_url(&self) -> Option<String> {
        self.text("audio_url").filter(|url| !url.is_empty())
    }

    pub fn genre_name(&self) -> Option<String> {
        self.text("genre_name")
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.0.get("chain_id").and_then(Value::as_u64)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for MarketItem {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
