/// Route module for declarative screen trees
///
/// Contains pure functional components for reading and describing routes:
/// - `decl`: the external declaration format and the `RouteElement` seam
/// - `pattern`: segment classification and the id/literal comparators
/// - `reader`: declaration tree → engine-owned nodes
/// - `node`: the immutable node tree

pub mod decl;
pub mod node;
pub mod pattern;
pub mod reader;

// Re-export commonly used types
pub use pattern::{classify_segment, PathSegment};
