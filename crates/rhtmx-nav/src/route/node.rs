/// Engine-owned route nodes
///
/// Nodes are built once by the reader and never mutated afterwards. Each node owns its
/// children exclusively; chains borrow nodes, they never own them.
use crate::route::pattern::{segment_pattern, PathSegment};
use crate::Params;

/// One declared screen or container
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub(crate) id: String,
    pub(crate) segments: Vec<PathSegment>,
    pub(crate) redirect_to: Option<String>,
    pub(crate) params: Params,
    pub(crate) children: Vec<RouteNode>,
}

impl RouteNode {
    /// Lowercased screen id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Path pattern segments; empty for pure layout/container nodes
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Redirect target, if this node is a redirect
    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    /// Static params
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Children in declaration order
    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }

    /// True if the node adds nothing to the path
    pub fn is_pathless(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the node adds a catch-all segment
    pub fn has_catch_all(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, PathSegment::CatchAll(_)))
    }

    /// First declared child that adds nothing to the path
    ///
    /// This is the implicit default route of a container.
    pub fn default_child(&self) -> Option<&RouteNode> {
        self.children.iter().find(|child| child.is_pathless())
    }

    /// The node's own pattern rendered back as a path (`/` when pathless)
    pub fn pattern(&self) -> String {
        let rendered: Vec<String> = self.segments.iter().map(segment_pattern).collect();
        format!("/{}", rendered.join("/"))
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(RouteNode::subtree_len).sum::<usize>()
    }
}

/// An ingested forest of route declarations
///
/// Roots keep declaration order. Rebuild the tree (and the chains derived from it)
/// whenever the external declaration changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTree {
    pub(crate) roots: Vec<RouteNode>,
}

impl RouteTree {
    /// Root nodes in declaration order
    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }

    /// Total node count
    pub fn len(&self) -> usize {
        self.roots.iter().map(RouteNode::subtree_len).sum()
    }

    /// True if nothing was declared
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first search for a node by id (case-insensitive)
    pub fn find(&self, id: &str) -> Option<&RouteNode> {
        fn walk<'a>(nodes: &'a [RouteNode], id: &str) -> Option<&'a RouteNode> {
            nodes.iter().find_map(|node| {
                if crate::route::pattern::ids_match(&node.id, id) {
                    Some(node)
                } else {
                    walk(&node.children, id)
                }
            })
        }

        walk(&self.roots, id)
    }
}
