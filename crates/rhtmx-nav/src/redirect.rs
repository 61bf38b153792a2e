/// Redirect resolution
///
/// A chain whose terminal node declares `redirect_to` is replaced by the target's chain,
/// repeatedly, until a non-redirecting terminal is reached or the hop bound is exceeded.
use tracing::{debug, warn};

use crate::chain::{param_text, RouteChain};
use crate::error::ResolveError;
use crate::matching::router_path_to_chain;
use crate::path::parse_path;
use crate::route::pattern::ids_match;

/// Default bound on redirect hops
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Looks up a redirect target: first as an id, then as a path
///
/// An id target resolves to the first catalogue chain whose terminal carries that id.
/// A path target has `:name` placeholders filled from `bound` params before matching.
fn lookup_target<'a>(
    target: &str,
    bound: &RouteChain<'a>,
    chains: &[RouteChain<'a>],
) -> Option<RouteChain<'a>> {
    let by_id = chains
        .iter()
        .find(|chain| chain.terminal().is_some_and(|entry| ids_match(entry.id(), target)));

    if let Some(chain) = by_id {
        return Some(chain.clone().with_default_children());
    }

    router_path_to_chain(&parse_path(&substitute_params(target, bound)), chains)
}

/// Fills `:name` placeholders in a redirect path from the params bound on a chain
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{parse_path, read_routes, router_path_to_chain, RouteDecl};
/// use rhtmx_nav::redirect::substitute_params;
///
/// let tree = read_routes(&[RouteDecl::redirect("/talk/:id", "old-talk", "/session/:id")]).unwrap();
/// let chains = tree.flatten();
/// let chain = router_path_to_chain(&parse_path("/talk/7"), &chains).unwrap();
///
/// assert_eq!(substitute_params("/session/:id", &chain), "/session/7");
/// assert_eq!(substitute_params("/session/:id?tab=notes", &chain), "/session/7?tab=notes");
/// ```
pub fn substitute_params(target: &str, chain: &RouteChain<'_>) -> String {
    let params = chain.params();
    let (path, suffix) = target
        .find(['?', '#'])
        .map_or((target, ""), |at| target.split_at(at));

    let path = path
        .split('/')
        .map(|segment| {
            segment
                .strip_prefix(':')
                .and_then(|name| params.get(name))
                .map(|value| urlencoding::encode(&param_text(value)).into_owned())
                .unwrap_or_else(|| segment.to_string())
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("{}{}", path, suffix)
}

/// Follows redirects from a resolved chain
///
/// Returns the chain unchanged when its terminal does not redirect.
///
/// # Errors
///
/// - [`ResolveError::NoMatch`] when a redirect target names no chain
/// - [`ResolveError::RedirectCycle`] when more than `max_hops` redirects are followed
pub fn resolve_redirects<'a>(
    chain: RouteChain<'a>,
    chains: &[RouteChain<'a>],
    max_hops: usize,
) -> Result<RouteChain<'a>, ResolveError> {
    let start = chain.ids().join("/");
    let mut current = chain;
    let mut hops = 0;

    while let Some(target) = current.terminal_node().and_then(|node| node.redirect_to()) {
        if hops >= max_hops {
            warn!(start = %start, max_hops, "redirect bound exceeded");
            return Err(ResolveError::RedirectCycle { start, max_hops });
        }
        hops += 1;

        let next = lookup_target(target, &current, chains).ok_or_else(|| ResolveError::NoMatch {
            target: target.to_string(),
        })?;
        debug!(from = ?current.ids(), to = ?next.ids(), hop = hops, "following redirect");
        current = next;
    }

    Ok(current)
}
