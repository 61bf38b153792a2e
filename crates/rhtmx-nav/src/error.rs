/// Error types for route tree ingestion and resolution
///
/// Two families, kept apart because callers treat them differently:
/// - [`StructureError`]: the declared tree is malformed. Programmer error, fail at read time.
/// - [`ResolveError`]: a path or id stack could not be resolved at navigation time.
use thiserror::Error;

/// The declared route tree violates a structural rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A node was declared without an id (or with only whitespace)
    #[error("route node at {location} has an empty id")]
    EmptyId { location: String },

    /// Two nodes share an id when compared case-insensitively
    #[error("duplicate route id `{id}`")]
    DuplicateId { id: String },

    /// A redirect is a terminal action and cannot own children
    #[error("route `{id}` declares both a redirect and children")]
    RedirectWithChildren { id: String },

    /// A catch-all segment must end the path: nothing may follow it in the node or below it
    #[error("route `{id}` has a segment after a catch-all")]
    MisplacedCatchAll { id: String },
}

/// A navigation target could not be turned into a chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No chain qualifies for the path or id stack
    #[error("no route matches `{target}`")]
    NoMatch { target: String },

    /// Following redirects did not settle within the hop bound
    #[error("redirect from `{start}` did not settle after {max_hops} hops")]
    RedirectCycle { start: String, max_hops: usize },
}
