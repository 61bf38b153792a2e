/// Chain selection: path → chain and id stack → chain
///
/// Both directions scan the catalogue in order and keep the first best candidate, so
/// declaration order breaks every tie. Both finish with default-child expansion, which is
/// what makes a bare container resolve to its first pathless child.
use std::cmp::Ordering;

use serde_json::Value;
use tracing::{debug, trace};

use crate::chain::{join_catch_all, RouteChain};
use crate::path::ParsedPath;
use crate::route::pattern::{ids_match, literal_matches, PathSegment};
use crate::Params;

/// An entry of an identifier stack
///
/// # Examples
///
/// ```
/// use rhtmx_nav::RouteId;
///
/// let stack = [RouteId::new("page-tabs"), RouteId::from("TAB-SPEAKER")];
/// assert_eq!(stack[1].id, "TAB-SPEAKER");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteId {
    /// Screen id, compared case-insensitively
    pub id: String,
    /// Params merged over the static params of the matching level
    pub params: Option<Params>,
}

impl RouteId {
    /// Creates an id without params
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: None,
        }
    }

    /// Sets one param
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How well one pattern segment matched its input segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentScore {
    /// Swallowed the remaining input
    CatchAll,
    /// Bound a single segment
    Param,
    /// Equal literal
    Literal,
}

/// Specificity of a candidate chain against an input path
///
/// Compared position by position, earlier positions dominating; when one score is a prefix
/// of the other the shorter pattern (the exact-length one) is more specific.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specificity(pub Vec<SegmentScore>);

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a.cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| other.0.len().cmp(&self.0.len()))
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A path parameter bound at a given chain level
struct Binding {
    level: usize,
    name: String,
    value: String,
}

/// Scores one chain against the input segments (pure function)
///
/// Returns `None` when the chain does not qualify: a literal differs, the input runs out,
/// or input remains after the pattern with no catch-all to absorb it.
fn score_chain(chain: &RouteChain<'_>, input: &[String]) -> Option<(Specificity, Vec<Binding>)> {
    let mut scores = Vec::new();
    let mut bindings = Vec::new();
    let mut position = 0;

    for (level, segment) in chain.pattern() {
        match segment {
            PathSegment::Static(literal) => {
                if !literal_matches(literal, input.get(position)?) {
                    return None;
                }
                scores.push(SegmentScore::Literal);
                position += 1;
            }
            PathSegment::Param(name) => {
                bindings.push(Binding {
                    level,
                    name: name.clone(),
                    value: input.get(position)?.clone(),
                });
                scores.push(SegmentScore::Param);
                position += 1;
            }
            PathSegment::CatchAll(name) => {
                if let Some(name) = name {
                    bindings.push(Binding {
                        level,
                        name: name.clone(),
                        value: join_catch_all(&input[position..]),
                    });
                }
                scores.push(SegmentScore::CatchAll);
                position = input.len();
            }
        }
    }

    (position == input.len()).then(|| (Specificity(scores), bindings))
}

/// Finds the best chain for a tokenized path
///
/// Literal segments outscore wildcards position by position; among equally specific
/// candidates the first in catalogue order wins. The winner's path params are bound onto
/// the level that declared them, then default children are appended. Returns `None` when
/// nothing qualifies; no partial match is invented.
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{parse_path, read_routes, router_path_to_chain, RouteDecl};
///
/// let tree = read_routes(&[
///     RouteDecl::new("/session/:id", "page-session"),
///     RouteDecl::new("/session/new", "page-new-session"),
/// ])
/// .unwrap();
/// let chains = tree.flatten();
///
/// let chain = router_path_to_chain(&parse_path("/session/new"), &chains).unwrap();
/// assert_eq!(chain.ids(), vec!["page-new-session"]);
///
/// let chain = router_path_to_chain(&parse_path("/session/42"), &chains).unwrap();
/// assert_eq!(chain.params()["id"], "42");
/// ```
pub fn router_path_to_chain<'a>(
    parsed: &ParsedPath,
    chains: &[RouteChain<'a>],
) -> Option<RouteChain<'a>> {
    let mut best: Option<(Specificity, &RouteChain<'a>, Vec<Binding>)> = None;

    for chain in chains {
        let Some((score, bindings)) = score_chain(chain, &parsed.segments) else {
            continue;
        };
        trace!(ids = ?chain.ids(), score = ?score, "candidate chain");

        let better = best
            .as_ref()
            .map_or(true, |(best_score, _, _)| score > *best_score);
        if better {
            best = Some((score, chain, bindings));
        }
    }

    let (_, chain, bindings) = best?;
    let mut chain = chain.clone();
    for binding in bindings {
        chain.entries_mut()[binding.level]
            .params
            .insert(binding.name, Value::String(binding.value));
    }

    let chain = chain.with_default_children();
    debug!(segments = ?parsed.segments, ids = ?chain.ids(), "path resolved");
    Some(chain)
}

/// Finds the chain named by an identifier stack
///
/// Ids compare case-insensitively, level by level from the root. A stack shorter than a
/// chain is a prefix match; the shortest qualifying chain wins (the catalogue holds a chain
/// for every level, so that is the exact one), first-declared on ties. Supplied params are
/// merged over the static params of the same level, then default children are appended.
/// An empty stack names nothing.
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{read_routes, router_ids_to_chain, RouteDecl, RouteId};
///
/// let tree = read_routes(&[RouteDecl::new("/", "page-tabs")
///     .with_child(RouteDecl::new("/speaker", "tab-speaker")
///         .with_child(RouteDecl::new("/", "page-speaker-list")))])
/// .unwrap();
/// let chains = tree.flatten();
///
/// let chain = router_ids_to_chain(&["PAGE-TABS".into(), "Tab-Speaker".into()], &chains).unwrap();
/// assert_eq!(chain.ids(), vec!["page-tabs", "tab-speaker", "page-speaker-list"]);
/// ```
pub fn router_ids_to_chain<'a>(ids: &[RouteId], chains: &[RouteChain<'a>]) -> Option<RouteChain<'a>> {
    if ids.is_empty() {
        return None;
    }

    let found = chains
        .iter()
        .filter(|chain| chain.len() >= ids.len())
        .filter(|chain| {
            ids.iter()
                .zip(chain.entries())
                .all(|(wanted, entry)| ids_match(&wanted.id, entry.id()))
        })
        .min_by_key(|chain| chain.len())?;

    let mut chain = found.clone();
    for (entry, wanted) in chain.entries_mut().iter_mut().zip(ids) {
        if let Some(params) = &wanted.params {
            entry.params.extend(params.clone());
        }
    }

    let chain = chain.with_default_children();
    debug!(ids = ?chain.ids(), "id stack resolved");
    Some(chain)
}
