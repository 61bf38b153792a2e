/// Path tokenizer and generator
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
/// URLs are untrusted free text, so nothing here fails: malformed input degrades to a
/// best-effort tokenization.
use std::borrow::Cow;
use std::collections::BTreeMap;

pub mod query;
pub use query::{parse_query, render_query};

/// A tokenized URL path
///
/// Segments are percent-decoded and never empty. The query mapping is empty when the
/// path carried no `?` component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPath {
    /// Ordered, decoded path segments
    pub segments: Vec<String>,
    /// Query parameters (last occurrence of a repeated key wins)
    pub query: BTreeMap<String, String>,
}

impl ParsedPath {
    /// Creates a parsed path from segments with no query
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: BTreeMap::new(),
        }
    }

    /// Renders the path back into a URL, query keys in sorted order
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_nav::path::parse_path;
    ///
    /// let parsed = parse_path("//speaker/?b=2&a=1");
    /// assert_eq!(parsed.to_url(), "/speaker?a=1&b=2");
    /// ```
    pub fn to_url(&self) -> String {
        let path = generate_path(&self.segments);
        if self.query.is_empty() {
            path
        } else {
            format!("{}?{}", path, render_query(&self.query))
        }
    }
}

/// Parses a URL path into decoded segments and a query mapping
///
/// - Splits on `/` and drops the empty segments produced by leading, trailing or duplicate slashes
/// - Percent-decodes each segment; bad escapes stay literal
/// - Parses a `?key=value&...` suffix; a `#fragment` is ignored
///
/// # Examples
///
/// ```
/// use rhtmx_nav::path::parse_path;
///
/// let parsed = parse_path("/speaker//John%20Doe/?tab=talks");
/// assert_eq!(parsed.segments, vec!["speaker", "John Doe"]);
/// assert_eq!(parsed.query.get("tab"), Some(&"talks".to_string()));
///
/// assert!(parse_path("/").segments.is_empty());
/// ```
pub fn parse_path(path: &str) -> ParsedPath {
    let without_fragment = path.split_once('#').map_or(path, |(before, _)| before);

    let (path_part, query_part) = match without_fragment.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (without_fragment, None),
    };

    ParsedPath {
        segments: split_segments(path_part),
        query: query_part.map(parse_query).unwrap_or_default(),
    }
}

/// Splits a raw path (no query) into decoded, non-empty segments
///
/// Shared by URL parsing and route pattern reading so both sides tokenize alike.
pub fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| decode_lossy(s).into_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Joins segments into a canonical path
///
/// Always has a leading `/`, never a trailing one (except the root `/`).
/// Segments are percent-encoded so `parse_path` reads them back unchanged; empty
/// segments are skipped for the same reason.
///
/// # Examples
///
/// ```
/// use rhtmx_nav::path::generate_path;
///
/// assert_eq!(generate_path(&["speaker", "John Doe"]), "/speaker/John%20Doe");
/// assert_eq!(generate_path::<&str>(&[]), "/");
/// ```
pub fn generate_path<S: AsRef<str>>(segments: &[S]) -> String {
    let encoded: Vec<Cow<'_, str>> = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .map(urlencoding::encode)
        .collect();

    if encoded.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", encoded.join("/"))
    }
}

/// Checks whether a path is already in the form `generate_path` produces
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`, `\`, `?` or `#`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use rhtmx_nav::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/speaker"));
/// assert!(!is_canonical_path("speaker"));
/// assert!(!is_canonical_path("/speaker/"));
/// assert!(!is_canonical_path("/speaker?x=1"));
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains(['\\', '?', '#']) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Percent-decodes text, degrading invalid UTF-8 to replacement characters
///
/// Unknown escapes such as `%zz` are kept as literal characters.
pub(crate) fn decode_lossy(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(_) => {
            let bytes = urlencoding::decode_binary(raw.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_root() {
        assert!(parse_path("/").segments.is_empty());
        assert!(parse_path("").segments.is_empty());
        assert!(parse_path("///").segments.is_empty());
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let parsed = parse_path("//schedule///session/");
        assert_eq!(parsed.segments, vec!["schedule", "session"]);
    }

    #[test]
    fn test_parse_decodes_segments() {
        let parsed = parse_path("/speaker/caf%C3%A9/a%2Fb");
        assert_eq!(parsed.segments, vec!["speaker", "café", "a/b"]);
    }

    #[test]
    fn test_parse_malformed_escape_is_literal() {
        let parsed = parse_path("/100%zz/%");
        assert_eq!(parsed.segments, vec!["100%zz", "%"]);
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let parsed = parse_path("/bad%FF");
        assert_eq!(parsed.segments, vec!["bad\u{FFFD}"]);
    }

    #[test]
    fn test_parse_query_and_fragment() {
        let parsed = parse_path("/map?lat=1&lng=2#pin");
        assert_eq!(parsed.segments, vec!["map"]);
        assert_eq!(parsed.query.len(), 2);
        assert_eq!(parsed.query["lat"], "1");
        assert_eq!(parsed.query["lng"], "2");
    }

    #[test]
    fn test_generate_root_and_nested() {
        assert_eq!(generate_path::<String>(&[]), "/");
        assert_eq!(generate_path(&["about"]), "/about");
        assert_eq!(generate_path(&["a", "", "b"]), "/a/b");
    }

    #[test]
    fn test_generate_output_is_canonical() {
        for segments in [vec![], vec!["speaker"], vec!["a b", "c/d", "ü"]] {
            assert!(is_canonical_path(&generate_path(&segments)));
        }
    }

    #[test]
    fn test_generate_then_parse_preserves_segments() {
        let segments = vec!["tab speaker", "a/b", "100%", "ü"];
        let parsed = parse_path(&generate_path(&segments));
        assert_eq!(parsed.segments, segments);
    }

    #[test]
    fn test_to_url_includes_sorted_query() {
        let mut parsed = ParsedPath::from_segments(["map"]);
        parsed.query.insert("z".to_string(), "last".to_string());
        parsed.query.insert("a".to_string(), "first value".to_string());
        assert_eq!(parsed.to_url(), "/map?a=first%20value&z=last");
    }
}
