//! Integration tests for rhtmx-nav against a conference-app route tree
//!
//! The tree mirrors a typical tabbed app:
//! - `page-tabs` (pathless) holding tabs, with `tab-schedule` as the default tab
//! - `tab-speaker` at `/speaker` whose default page is `page-speaker-list`
//! - plain pages `page-map`, `page-about` and a top-level `page-tutorial`

use pretty_assertions::assert_eq;
use rhtmx_nav::*;
use rstest::rstest;

fn conference_app_routing() -> Vec<RouteDecl> {
    vec![
        RouteDecl::new("/", "page-tabs").with_children([
            RouteDecl::new("/", "tab-schedule").with_child(RouteDecl::new("/", "PAGE-SCHEDULE")),
            RouteDecl::new("/speaker", "tab-speaker")
                .with_child(RouteDecl::new("/", "page-speaker-list")),
            RouteDecl::new("/map", "page-map"),
            RouteDecl::new("/about", "page-about"),
        ]),
        RouteDecl::new("/tutorial", "page-tutorial"),
    ]
}

fn route_ids(path: &str, chains: &[RouteChain<'_>]) -> Option<Vec<String>> {
    router_path_to_chain(&parse_path(path), chains)
        .map(|chain| chain.ids().into_iter().map(str::to_string).collect())
}

fn route_path(ids: &[&str], chains: &[RouteChain<'_>]) -> Option<String> {
    let ids: Vec<RouteId> = ids.iter().map(|id| RouteId::new(*id)).collect();
    let chain = router_ids_to_chain(&ids, chains)?;
    chain_to_path(&chain).map(|segments| generate_path(&segments))
}

#[rstest]
#[case("/", &["page-tabs", "tab-schedule", "page-schedule"])]
#[case("/speaker", &["page-tabs", "tab-speaker", "page-speaker-list"])]
#[case("/map", &["page-tabs", "page-map"])]
#[case("/about", &["page-tabs", "page-about"])]
#[case("/tutorial", &["page-tutorial"])]
#[case("//speaker/", &["page-tabs", "tab-speaker", "page-speaker-list"])]
#[case("/map?lat=1#pin", &["page-tabs", "page-map"])]
fn test_path_to_ids(#[case] path: &str, #[case] expected: &[&str]) {
    let tree = read_routes(&conference_app_routing()).unwrap();
    let chains = flatten_router_tree(&tree);

    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(route_ids(path, &chains), Some(expected));
}

#[rstest]
#[case(&["PAGE-TABS", "tab-schedule", "page-schedule"], "/")]
#[case(&["page-tabs", "TAB-SPEAKER"], "/speaker")]
#[case(&["page-tabs", "TAB-SPEAKER", "page-speaker-list"], "/speaker")]
#[case(&["page-tabs", "PAGE-MAP"], "/map")]
#[case(&["page-tabs", "page-about"], "/about")]
#[case(&["page-tutorial"], "/tutorial")]
#[case(&["page-tabs"], "/")]
fn test_ids_to_path(#[case] ids: &[&str], #[case] expected: &str) {
    let tree = read_routes(&conference_app_routing()).unwrap();
    let chains = flatten_router_tree(&tree);

    assert_eq!(route_path(ids, &chains).as_deref(), Some(expected));
}

#[rstest]
#[case("/unknown/segment/count/mismatch")]
#[case("/speaker/extra")]
#[case("/Map")]
#[case("/tutorial/page-map")]
fn test_unmatched_paths(#[case] path: &str) {
    let tree = read_routes(&conference_app_routing()).unwrap();
    let chains = flatten_router_tree(&tree);

    assert_eq!(route_ids(path, &chains), None);
}

#[test]
fn test_unknown_id_stacks() {
    let tree = read_routes(&conference_app_routing()).unwrap();
    let chains = flatten_router_tree(&tree);

    assert_eq!(route_path(&["page-tabs", "page-tutorial"], &chains), None);
    assert_eq!(route_path(&["tab-speaker"], &chains), None);
    assert_eq!(route_path(&[], &chains), None);
}

#[test]
fn test_declared_ids_are_lowercased() {
    let tree = read_routes(&conference_app_routing()).unwrap();
    assert!(tree.find("page-schedule").is_some());
    assert_eq!(tree.len(), 8);
    assert_eq!(flatten_router_tree(&tree).len(), 8);
}

#[test]
fn test_resolver_facade_matches_free_functions() {
    let tree = read_routes(&conference_app_routing()).unwrap();
    let chains = tree.flatten();
    let resolver = Resolver::new(&chains, ResolverConfig::default());

    for path in ["/", "/speaker", "/map", "/about", "/tutorial"] {
        let chain = resolver.resolve_path(path).unwrap();
        assert_eq!(Some(chain.clone()), router_path_to_chain(&parse_path(path), &chains));
        assert_eq!(resolver.path_for_chain(&chain).as_deref(), Some(path));
    }
}
