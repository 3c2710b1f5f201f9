//! Bidirectional mapping between the active filter list and URL query
//! parameters.
//!
//! Filter predicates travel as repeated `filter=<JSON>` parameters, where the
//! JSON value is the predicate's wire shape and is percent-encoded like any
//! other query value. All other parameters (`sort`, locale, search terms) are
//! opaque to the codec and preserved verbatim, with one deliberate exception:
//! `page` is dropped whenever the filter set is re-encoded, because
//! pagination resets on refinement.
//!
//! ## Example
//!
//! ```text
//! ?sort=price-asc&filter=%7B%22price%22%3A%7B%22min%22%3A0%2C%22max%22%3A150%7D%7D
//! ```

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use storekit_core::ProductFilter;

/// Query parameter key carrying one encoded filter predicate per occurrence.
const FILTER_KEY: &str = "filter";

/// Pagination parameter, cleared on every filter change.
const PAGE_KEY: &str = "page";

/// Parses a raw query string (with or without the leading `?`) into ordered
/// key/value pairs.
///
/// Percent-encoding is decoded on both keys and values; `+` is treated as an
/// encoded space, as form-encoded URLs produce. Segments without `=` become
/// pairs with an empty value. Empty segments are skipped.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Assembles ordered key/value pairs back into a query string (no leading
/// `?`). Keys and values are percent-encoded.
#[must_use]
pub fn build_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, NON_ALPHANUMERIC),
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> String {
    let unplussed = raw.replace('+', " ");
    percent_decode_str(&unplussed)
        .decode_utf8_lossy()
        .into_owned()
}

/// Extracts the active filter list from decoded query pairs.
///
/// Every `filter` value is parsed as a JSON predicate; values that do not
/// parse are skipped with a warning rather than failing the whole decode,
/// so a hand-edited URL degrades to fewer filters instead of an error page.
#[must_use]
pub fn decode_filters(params: &[(String, String)]) -> Vec<ProductFilter> {
    params
        .iter()
        .filter(|(key, _)| key == FILTER_KEY)
        .filter_map(|(_, value)| match serde_json::from_str(value) {
            Ok(filter) => Some(filter),
            Err(error) => {
                tracing::warn!(%value, %error, "skipping unparseable filter parameter");
                None
            }
        })
        .collect()
}

/// Re-encodes the filter list into a copy of `existing` query pairs.
///
/// Non-filter parameters keep their values and relative order. Previous
/// `filter` entries are dropped and replaced by one entry per predicate, in
/// list order, appended at the end. `page` is deleted: refinement always
/// restarts pagination.
#[must_use]
pub fn encode_filters(
    filters: &[ProductFilter],
    existing: &[(String, String)],
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = existing
        .iter()
        .filter(|(key, _)| key != FILTER_KEY && key != PAGE_KEY)
        .cloned()
        .collect();

    for filter in filters {
        match serde_json::to_string(filter) {
            Ok(json) => params.push((FILTER_KEY.to_string(), json)),
            Err(error) => {
                tracing::warn!(%error, "skipping unserializable filter predicate");
            }
        }
    }

    params
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
