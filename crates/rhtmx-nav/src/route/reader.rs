/// Route tree reader
///
/// Converts an externally owned declaration tree into engine-owned [`RouteNode`]s,
/// depth-first, keeping child declaration order (first-declared sibling wins ties later on).
/// Structural problems are programmer errors and are reported immediately.
use std::collections::HashSet;

use tracing::debug;

use super::decl::RouteElement;
use super::node::{RouteNode, RouteTree};
use super::pattern::{classify_segment, normalize_id, PathSegment};
use crate::error::StructureError;
use crate::path::split_segments;

/// Accumulator for fold-based pattern parsing
#[derive(Default)]
struct PatternState {
    segments: Vec<PathSegment>,
    catch_all_seen: bool,
    misplaced: bool,
}

impl PatternState {
    fn with_segment(mut self, segment: PathSegment) -> Self {
        if self.catch_all_seen {
            self.misplaced = true;
        }
        if matches!(segment, PathSegment::CatchAll(_)) {
            self.catch_all_seen = true;
        }
        self.segments.push(segment);
        self
    }
}

/// Parses a node's path pattern into segments (pure function)
///
/// `""` and `"/"` both yield no segments. Returns `None` when a segment follows a catch-all.
///
/// # Examples
///
/// ```
/// use rhtmx_nav::route::reader::parse_pattern;
/// use rhtmx_nav::route::pattern::PathSegment;
///
/// assert_eq!(parse_pattern("/"), Some(vec![]));
/// assert_eq!(
///     parse_pattern("/session/:id"),
///     Some(vec![
///         PathSegment::Static("session".to_string()),
///         PathSegment::Param("id".to_string()),
///     ])
/// );
/// assert_eq!(parse_pattern("/*rest/more"), None);
/// ```
pub fn parse_pattern(path: &str) -> Option<Vec<PathSegment>> {
    let state = split_segments(path)
        .iter()
        .map(|raw| classify_segment(raw))
        .fold(PatternState::default(), PatternState::with_segment);

    (!state.misplaced).then_some(state.segments)
}

/// Reader context threaded through the depth-first walk
struct ReadContext {
    seen: HashSet<String>,
}

impl ReadContext {
    fn read_node<E: RouteElement>(
        &mut self,
        element: &E,
        location: &str,
        under_catch_all: bool,
    ) -> Result<RouteNode, StructureError> {
        let id = normalize_id(element.route_id());
        if id.is_empty() {
            return Err(StructureError::EmptyId {
                location: location.to_string(),
            });
        }

        if !self.seen.insert(id.clone()) {
            return Err(StructureError::DuplicateId { id });
        }

        let children = element.child_routes();
        let redirect_to = element
            .redirect_to()
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .map(str::to_string);

        if redirect_to.is_some() && !children.is_empty() {
            return Err(StructureError::RedirectWithChildren { id });
        }

        let segments = match parse_pattern(element.route_path()) {
            Some(segments) if !(under_catch_all && !segments.is_empty()) => segments,
            _ => return Err(StructureError::MisplacedCatchAll { id }),
        };

        let below_catch_all =
            under_catch_all || segments.iter().any(|s| matches!(s, PathSegment::CatchAll(_)));

        let children = children
            .into_iter()
            .enumerate()
            .map(|(index, child)| {
                let child_location = format!("{}.children[{}]", location, index);
                self.read_node(child, &child_location, below_catch_all)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteNode {
            id,
            segments,
            redirect_to,
            params: element.static_params(),
            children,
        })
    }
}

/// Reads a forest of declarations into a [`RouteTree`]
///
/// # Errors
///
/// - [`StructureError::EmptyId`] when an id is empty
/// - [`StructureError::DuplicateId`] when two ids collide case-insensitively anywhere in the tree
/// - [`StructureError::RedirectWithChildren`] when a redirect node has children
/// - [`StructureError::MisplacedCatchAll`] when anything contributes segments after a catch-all
///
/// # Examples
///
/// ```
/// use rhtmx_nav::{read_routes, RouteDecl};
///
/// let tree = read_routes(&[
///     RouteDecl::new("/", "PAGE-TABS").with_child(RouteDecl::new("/map", "page-map")),
///     RouteDecl::new("/tutorial", "page-tutorial"),
/// ])
/// .unwrap();
///
/// assert_eq!(tree.roots()[0].id(), "page-tabs");
/// assert_eq!(tree.len(), 3);
/// ```
pub fn read_routes<E: RouteElement>(roots: &[E]) -> Result<RouteTree, StructureError> {
    let mut context = ReadContext {
        seen: HashSet::new(),
    };

    let roots = roots
        .iter()
        .enumerate()
        .map(|(index, element)| context.read_node(element, &format!("roots[{}]", index), false))
        .collect::<Result<Vec<_>, _>>()?;

    let tree = RouteTree { roots };
    debug!(roots = tree.roots.len(), nodes = tree.len(), "read route tree");
    Ok(tree)
}
