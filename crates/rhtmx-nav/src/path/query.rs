/// Query-string codec for the `?key=value&...` path suffix
use std::collections::BTreeMap;

use super::decode_lossy;

/// Parses a query string (without the leading `?`) into a mapping
///
/// - Pairs are separated by `&`; empty pairs are skipped
/// - A key without `=` maps to an empty value
/// - `+` means space, then percent-decoding applies
/// - A repeated key keeps its last value
///
/// # Examples
///
/// ```
/// use rhtmx_nav::path::parse_query;
///
/// let query = parse_query("day=2&track=web+dev&day=3&flag");
/// assert_eq!(query["day"], "3");
/// assert_eq!(query["track"], "web dev");
/// assert_eq!(query["flag"], "");
/// ```
pub fn parse_query(raw: &str) -> BTreeMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Renders a mapping back into a query string (without the leading `?`)
pub fn render_query(query: &BTreeMap<String, String>) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> String {
    decode_lossy(&raw.replace('+', " ")).into_owned()
}
