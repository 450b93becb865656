// web_app/search/query.rs - Query string builder for the search route
//
// Each criteria field contributes one optional parameter, always in the same
// order, so identical criteria always produce identical query strings.

use url::form_urlencoded;

use crate::web_app::model::SearchCriteria;

/// Parameter names understood by the backend search endpoint
pub const PARAM_KEYWORD: &str = "q";
pub const PARAM_GENRE: &str = "genre";
pub const PARAM_MIN_PRICE: &str = "min_price";
pub const PARAM_MAX_PRICE: &str = "max_price";
pub const PARAM_SORT: &str = "sort";

/// Ordered (name, value) pairs for the given criteria
///
/// - `q`: trimmed keyword, omitted when blank
/// - `genre`, `min_price`, `max_price`: raw values, omitted when empty
/// - `sort`: always present
pub fn query_pairs(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(5);

    let keyword = criteria.keyword.trim();
    if !keyword.is_empty() {
        pairs.push((PARAM_KEYWORD, keyword.to_string()));
    }
    if !criteria.genre_id.is_empty() {
        pairs.push((PARAM_GENRE, criteria.genre_id.clone()));
    }
    if !criteria.min_price.is_empty() {
        pairs.push((PARAM_MIN_PRICE, criteria.min_price.clone()));
    }
    if !criteria.max_price.is_empty() {
        pairs.push((PARAM_MAX_PRICE, criteria.max_price.clone()));
    }
    pairs.push((PARAM_SORT, criteria.sort.as_param().to_string()));

    pairs
}

/// Form-encoded query string (without the leading `?`)
pub fn build_query(criteria: &SearchCriteria) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in query_pairs(criteria) {
        serializer.append_pair(name, &value);
    }
    serializer.finish()
}
