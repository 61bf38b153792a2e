/// Resolver façade
///
/// Bundles a chain catalogue with its configuration and runs the full pipeline:
/// tokenize → match → follow redirects. The catalogue is owned by the caller; rebuild it
/// (and the resolver) when the route tree changes.
use tracing::instrument;

use crate::chain::{chain_to_path, RouteChain};
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::matching::{router_ids_to_chain, router_path_to_chain, RouteId};
use crate::path::{generate_path, parse_path, ParsedPath};
use crate::redirect::resolve_redirects;

/// Resolves paths and id stacks against one catalogue
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{read_routes, ResolverConfig, Resolver, RouteDecl, RouteId};
///
/// let tree = read_routes(&[
///     RouteDecl::new("/", "page-tabs").with_children([
///         RouteDecl::new("/", "tab-schedule").with_child(RouteDecl::new("/", "page-schedule")),
///         RouteDecl::new("/map", "page-map"),
///     ]),
///     RouteDecl::redirect("/legacy-map", "legacy-map", "page-map"),
/// ])
/// .unwrap();
/// let chains = tree.flatten();
/// let resolver = Resolver::new(&chains, ResolverConfig::default());
///
/// assert_eq!(resolver.resolve_path("/legacy-map").unwrap().ids(), vec!["page-tabs", "page-map"]);
/// assert_eq!(resolver.path_for_ids(&[RouteId::new("PAGE-TABS")]).unwrap(), "/");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    chains: &'a [RouteChain<'a>],
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over a catalogue
    pub fn new(chains: &'a [RouteChain<'a>], config: ResolverConfig) -> Self {
        Self { chains, config }
    }

    /// The catalogue being resolved against
    pub fn chains(&self) -> &'a [RouteChain<'a>] {
        self.chains
    }

    /// The active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves a URL path string
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_path(&self, path: &str) -> Result<RouteChain<'a>, ResolveError> {
        self.resolve_parsed(&parse_path(path))
            .map_err(|_| ResolveError::NoMatch {
                target: path.to_string(),
            })
            .and_then(|chain| self.follow(chain))
    }

    /// Resolves an already tokenized path
    ///
    /// Redirects are not followed; use [`Resolver::resolve_path`] for the full pipeline.
    pub fn resolve_parsed(&self, parsed: &ParsedPath) -> Result<RouteChain<'a>, ResolveError> {
        router_path_to_chain(parsed, self.chains).ok_or_else(|| ResolveError::NoMatch {
            target: parsed.to_url(),
        })
    }

    /// Resolves an identifier stack
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_ids(&self, ids: &[RouteId]) -> Result<RouteChain<'a>, ResolveError> {
        let chain = router_ids_to_chain(ids, self.chains).ok_or_else(|| ResolveError::NoMatch {
            target: describe_ids(ids),
        })?;
        self.follow(chain)
    }

    /// Canonical path for an identifier stack
    pub fn path_for_ids(&self, ids: &[RouteId]) -> Result<String, ResolveError> {
        let chain = self.resolve_ids(ids)?;
        self.path_for_chain(&chain).ok_or_else(|| ResolveError::NoMatch {
            target: describe_ids(ids),
        })
    }

    /// Canonical path for a chain; `None` when a path parameter is unbound
    pub fn path_for_chain(&self, chain: &RouteChain<'_>) -> Option<String> {
        chain_to_path(chain).map(|segments| generate_path(&segments))
    }

    fn follow(&self, chain: RouteChain<'a>) -> Result<RouteChain<'a>, ResolveError> {
        resolve_redirects(chain, self.chains, self.config.max_redirects)
    }
}

fn describe_ids(ids: &[RouteId]) -> String {
    ids.iter()
        .map(|route_id| route_id.id.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{read_routes, RouteDecl, RouteTree};
    use pretty_assertions::assert_eq;

    fn tree() -> RouteTree {
        read_routes(&[
            RouteDecl::new("/", "page-tabs").with_children([
                RouteDecl::new("/", "page-home"),
                RouteDecl::new("/user/:name", "page-user"),
            ]),
            RouteDecl::redirect("/loop", "loop", "loop"),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_match_carries_original_path() {
        let tree = tree();
        let chains = tree.flatten();
        let resolver = Resolver::new(&chains, ResolverConfig::default());

        let err = resolver.resolve_path("/nope?x=1").unwrap_err();
        assert_eq!(err, ResolveError::NoMatch { target: "/nope?x=1".to_string() });
    }

    #[test]
    fn test_redirect_cycle_respects_config() {
        let tree = tree();
        let chains = tree.flatten();
        let resolver = Resolver::new(&chains, ResolverConfig { max_redirects: 1 });

        let err = resolver.resolve_path("/loop").unwrap_err();
        assert_eq!(
            err,
            ResolveError::RedirectCycle {
                start: "loop".to_string(),
                max_hops: 1
            }
        );
    }

    #[test]
    fn test_path_for_ids_needs_bound_params() {
        let tree = tree();
        let chains = tree.flatten();
        let resolver = Resolver::new(&chains, ResolverConfig::default());

        let bare = [RouteId::new("page-tabs"), RouteId::new("page-user")];
        assert!(matches!(
            resolver.path_for_ids(&bare),
            Err(ResolveError::NoMatch { .. })
        ));

        let with_name = [
            RouteId::new("page-tabs"),
            RouteId::new("page-user").with_param("name", "Ada Lovelace"),
        ];
        assert_eq!(resolver.path_for_ids(&with_name).unwrap(), "/user/Ada%20Lovelace");
    }

    #[test]
    fn test_resolve_path_round_trips_through_ids() {
        let tree = tree();
        let chains = tree.flatten();
        let resolver = Resolver::new(&chains, ResolverConfig::default());

        let chain = resolver.resolve_path("/user/grace").unwrap();
        let ids: Vec<RouteId> = chain
            .entries()
            .iter()
            .map(|entry| RouteId {
                id: entry.id().to_uppercase(),
                params: Some(entry.params.clone()),
            })
            .collect();

        assert_eq!(resolver.path_for_ids(&ids).unwrap(), "/user/grace");
    }
}
