//! Pattern segments and the comparators used against them
//!
//! Pure functional parsing of route path patterns into typed segments.
//! Two comparison strategies live here and nowhere else:
//! - route ids compare case-insensitively ([`ids_match`])
//! - path literals compare exactly ([`literal_matches`])

/// One segment of a route's path pattern
///
/// # Examples
///
/// ```
/// use rhtmx_nav::route::pattern::{classify_segment, PathSegment};
///
/// assert_eq!(classify_segment("speaker"), PathSegment::Static("speaker".to_string()));
/// assert_eq!(classify_segment(":id"), PathSegment::Param("id".to_string()));
/// assert_eq!(classify_segment("*rest"), PathSegment::CatchAll(Some("rest".to_string())));
/// assert_eq!(classify_segment("*"), PathSegment::CatchAll(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Literal text that must equal the input segment
    Static(String),
    /// `:name` - matches any single segment and binds it
    Param(String),
    /// `*` or `*name` - matches all remaining segments (possibly none)
    CatchAll(Option<String>),
}

impl PathSegment {
    /// Returns true for segments that do not require a fixed literal
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, PathSegment::Static(_))
    }

    /// The parameter name this segment binds, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PathSegment::Static(_) => None,
            PathSegment::Param(name) => Some(name),
            PathSegment::CatchAll(name) => name.as_deref(),
        }
    }
}

/// Classifies a decoded segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Catch-all**: `*` or `*name`
/// 2. **Param**: `:name` (a bare `:` is a literal)
/// 3. **Static**: any other text
pub fn classify_segment(segment: &str) -> PathSegment {
    if let Some(name) = segment.strip_prefix('*') {
        return PathSegment::CatchAll((!name.is_empty()).then(|| name.to_string()));
    }

    match segment.strip_prefix(':') {
        Some(name) if !name.is_empty() => PathSegment::Param(name.to_string()),
        _ => PathSegment::Static(segment.to_string()),
    }
}

/// Renders a segment back into pattern syntax
pub fn segment_pattern(segment: &PathSegment) -> String {
    match segment {
        PathSegment::Static(text) => text.clone(),
        PathSegment::Param(name) => format!(":{}", name),
        PathSegment::CatchAll(name) => format!("*{}", name.as_deref().unwrap_or("")),
    }
}

/// Compares two route ids, ignoring case and surrounding whitespace
///
/// Both sides are folded with [`normalize_id`], so an id always matches the spelling it
/// was declared with.
pub fn ids_match(a: &str, b: &str) -> bool {
    normalize_id(a) == normalize_id(b)
}

/// Folds a route id into the form stored on nodes
pub fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// Compares a literal pattern segment with an input segment (case-sensitive)
pub fn literal_matches(literal: &str, input: &str) -> bool {
    literal == input
}
