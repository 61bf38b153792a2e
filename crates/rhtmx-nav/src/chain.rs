/// Route chains and the tree flattener
///
/// A chain is a root-to-node walk through the tree: one fully addressable screen stack.
/// Chains borrow their nodes from the [`RouteTree`] and carry per-entry params
/// (static params, plus any path params or caller params bound during resolution).
use serde_json::Value;

use crate::path::decode_lossy;
use crate::route::node::{RouteNode, RouteTree};
use crate::route::pattern::PathSegment;
use crate::Params;

/// One level of a chain
#[derive(Debug, Clone, PartialEq)]
pub struct ChainEntry<'a> {
    /// The node at this depth
    pub node: &'a RouteNode,
    /// Params for this level: node static params, overridden by bound values
    pub params: Params,
}

impl<'a> ChainEntry<'a> {
    /// Entry carrying only the node's static params
    pub fn new(node: &'a RouteNode) -> Self {
        Self {
            node,
            params: node.params.clone(),
        }
    }

    /// Node id
    pub fn id(&self) -> &'a str {
        let node: &'a RouteNode = self.node;
        &node.id
    }
}

/// An ordered root-to-node sequence of entries
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{flatten_router_tree, read_routes, RouteDecl};
///
/// let tree = read_routes(&[RouteDecl::new("/", "tabs")
///     .with_child(RouteDecl::new("/map", "page-map"))])
/// .unwrap();
/// let chains = flatten_router_tree(&tree);
///
/// assert_eq!(chains.len(), 2);
/// assert_eq!(chains[1].ids(), vec!["tabs", "page-map"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteChain<'a> {
    entries: Vec<ChainEntry<'a>>,
}

impl<'a> RouteChain<'a> {
    /// Builds a chain from entries (root first)
    pub fn from_entries(entries: Vec<ChainEntry<'a>>) -> Self {
        Self { entries }
    }

    /// Entries root first
    pub fn entries(&self) -> &[ChainEntry<'a>] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ChainEntry<'a>] {
        &mut self.entries
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for the empty chain
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The deepest entry
    pub fn terminal(&self) -> Option<&ChainEntry<'a>> {
        self.entries.last()
    }

    /// The deepest node
    pub fn terminal_node(&self) -> Option<&'a RouteNode> {
        self.entries.last().map(|entry| entry.node)
    }

    /// Node ids root first
    pub fn ids(&self) -> Vec<&'a str> {
        self.entries.iter().map(ChainEntry::id).collect()
    }

    /// All params, deeper levels overriding shallower ones
    pub fn params(&self) -> Params {
        self.entries
            .iter()
            .flat_map(|entry| entry.params.iter())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Pattern segments of every level, tagged with the entry index that declared them
    pub fn pattern(&self) -> impl Iterator<Item = (usize, &'a PathSegment)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .flat_map(|(index, entry)| {
                let node: &'a RouteNode = entry.node;
                node.segments.iter().map(move |seg| (index, seg))
            })
    }

    /// True if any level declares a `:name` or catch-all segment
    pub fn has_wildcards(&self) -> bool {
        self.pattern().any(|(_, seg)| seg.is_wildcard())
    }

    /// Returns a copy with one more level appended
    pub fn extended(&self, node: &'a RouteNode) -> Self {
        let mut entries = self.entries.clone();
        entries.push(ChainEntry::new(node));
        Self { entries }
    }

    /// Appends default children until the terminal has no pathless child
    ///
    /// A path or id stack that lands on a container resolves to the container's
    /// first-declared pathless child, recursively.
    pub fn with_default_children(mut self) -> Self {
        while let Some(child) = self.terminal_node().and_then(RouteNode::default_child) {
            self.entries.push(ChainEntry::new(child));
        }
        self
    }
}

/// Flattens a route tree into its chain catalogue
///
/// Emits one chain per node (not just per leaf), in depth-first pre-order, so every
/// container is independently addressable and catalogue order equals declaration order.
pub fn flatten_router_tree(tree: &RouteTree) -> Vec<RouteChain<'_>> {
    fn walk<'a>(node: &'a RouteNode, prefix: &RouteChain<'a>, out: &mut Vec<RouteChain<'a>>) {
        let chain = prefix.extended(node);
        out.push(chain.clone());
        for child in &node.children {
            walk(child, &chain, out);
        }
    }

    let mut chains = Vec::with_capacity(tree.len());
    for root in &tree.roots {
        walk(root, &RouteChain::default(), &mut chains);
    }
    chains
}

impl RouteTree {
    /// Method form of [`flatten_router_tree`]
    pub fn flatten(&self) -> Vec<RouteChain<'_>> {
        flatten_router_tree(self)
    }
}

/// Turns a chain back into path segments
///
/// Concatenates every level's pattern, skipping pathless levels. `:name` segments take
/// their value from that level's params; a catch-all expands its bound value (split on `/`)
/// or contributes nothing when unbound. Returns `None` when a `:name` has no value.
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{chain_to_path, flatten_router_tree, generate_path, read_routes, RouteDecl};
///
/// let tree = read_routes(&[RouteDecl::new("/", "tabs")
///     .with_child(RouteDecl::new("/speaker", "tab-speaker")
///         .with_child(RouteDecl::new("/", "page-speaker-list")))])
/// .unwrap();
/// let chains = flatten_router_tree(&tree);
///
/// let segments = chain_to_path(&chains[2]).unwrap();
/// assert_eq!(generate_path(&segments), "/speaker");
/// ```
pub fn chain_to_path(chain: &RouteChain<'_>) -> Option<Vec<String>> {
    let mut segments = Vec::new();

    for (index, segment) in chain.pattern() {
        let params = &chain.entries[index].params;
        match segment {
            PathSegment::Static(text) => segments.push(text.clone()),
            PathSegment::Param(name) => segments.push(param_text(params.get(name)?)),
            PathSegment::CatchAll(name) => {
                if let Some(value) = name.as_ref().and_then(|name| params.get(name)) {
                    segments.extend(split_catch_all(&param_text(value)));
                }
            }
        }
    }

    Some(segments)
}

/// Joins the segments absorbed by a catch-all into one param value
///
/// `%` and `/` inside a segment are escaped so [`split_catch_all`] recovers the segments.
pub(crate) fn join_catch_all(segments: &[String]) -> String {
    segments
        .iter()
        .map(|segment| segment.replace('%', "%25").replace('/', "%2F"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Splits a catch-all param value back into path segments
pub(crate) fn split_catch_all(value: &str) -> Vec<String> {
    value
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| decode_lossy(s).into_owned())
        .collect()
}

/// Path text for a param value; strings are used verbatim, other JSON values rendered
pub(crate) fn param_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
