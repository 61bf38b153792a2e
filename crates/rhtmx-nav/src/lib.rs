//! # RHTMX Nav
//!
//! A declarative screen-stack router. A nested tree of route declarations (screens with an
//! id, an optional path pattern, static params and an optional redirect) is flattened into a
//! catalogue of root-to-node **chains**, and the engine resolves in both directions:
//! - URL path → chain (`/speaker` → `page-tabs > tab-speaker > page-speaker-list`)
//! - id stack → chain → canonical path (`[PAGE-TABS, tab-speaker]` → `/speaker`)
//!
//! Supported path patterns:
//! - Static segments (`/about`)
//! - Parameters (`/session/:id`)
//! - Catch-all (`/docs/*rest`)
//! - Pathless layout/container nodes (`""` or `/`)
//!
//! ## Functional Programming Approach
//!
//! Everything is a pure function over immutable inputs:
//! - **No caching**: the caller owns the catalogue and rebuilds it when the tree changes
//! - **Deterministic**: ordered containers throughout, declaration order breaks every tie
//! - **Borrowing chains**: chains reference the nodes of the tree they came from
//!
//! ## Example
//!
//! ```
//! use rhtmx_nav::{parse_path, read_routes, router_path_to_chain, RouteDecl};
//!
//! let tree = read_routes(&[
//!     RouteDecl::new("/", "page-tabs").with_children([
//!         RouteDecl::new("/", "tab-schedule").with_child(RouteDecl::new("/", "page-schedule")),
//!         RouteDecl::new("/speaker", "tab-speaker")
//!             .with_child(RouteDecl::new("/", "page-speaker-list")),
//!     ]),
//!     RouteDecl::new("/tutorial", "page-tutorial"),
//! ])
//! .unwrap();
//! let chains = tree.flatten();
//!
//! let chain = router_path_to_chain(&parse_path("/"), &chains).unwrap();
//! assert_eq!(chain.ids(), vec!["page-tabs", "tab-schedule", "page-schedule"]);
//! ```

use std::collections::BTreeMap;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod chain;
pub mod config;
pub mod error;
pub mod matching;
pub mod path;
pub mod redirect;
pub mod resolver;
pub mod route;

// ============================================================================
// Re-exports
// ============================================================================

pub use chain::{chain_to_path, flatten_router_tree, ChainEntry, RouteChain};
pub use config::{Config, ResolverConfig, RoutingConfig};
pub use error::{ResolveError, StructureError};
pub use matching::{router_ids_to_chain, router_path_to_chain, RouteId, SegmentScore, Specificity};
pub use path::{generate_path, is_canonical_path, parse_path, ParsedPath};
pub use redirect::{resolve_redirects, DEFAULT_MAX_REDIRECTS};
pub use resolver::Resolver;
pub use route::decl::{RouteDecl, RouteElement};
pub use route::node::{RouteNode, RouteTree};
pub use route::pattern::{ids_match, literal_matches, PathSegment};
pub use route::reader::read_routes;

/// Static and bound parameters, keyed by name (ordered for deterministic output)
pub type Params = BTreeMap<String, serde_json::Value>;
