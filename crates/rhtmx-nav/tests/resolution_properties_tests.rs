//! Catalogue-wide properties of rhtmx-nav
//!
//! These walk every chain of a mixed route tree rather than hand-picked paths:
//! - path generation round-trips through the tokenizer
//! - id stacks resolve regardless of case
//! - resolution is deterministic
//! - redirect chains are bounded

use pretty_assertions::assert_eq;
use rhtmx_nav::*;
use rstest::{fixture, rstest};

#[fixture]
fn declarations() -> Vec<RouteDecl> {
    vec![
        RouteDecl::new("", "app-shell").with_children([
            RouteDecl::new("/", "page-home"),
            RouteDecl::new("/schedule", "tab-schedule").with_children([
                RouteDecl::new("", "page-schedule"),
                RouteDecl::new("/session/:sessionId", "page-session").with_param("modal", false),
                RouteDecl::new("/filters", "page-filters"),
            ]),
            RouteDecl::new("/speakers/all speakers", "page-speakers"),
            RouteDecl::new("/docs/*rest", "page-docs"),
        ]),
        RouteDecl::new("/account", "page-account").with_param("secure", true),
        RouteDecl::redirect("/login", "legacy-login", "page-account"),
        RouteDecl::redirect("/r1", "r1", "r2"),
        RouteDecl::redirect("/r2", "r2", "/r3"),
        RouteDecl::redirect("/r3", "r3", "R1"),
    ]
}

fn mixed_case(id: &str, flip: usize) -> String {
    id.chars()
        .enumerate()
        .map(|(i, c)| {
            if (i + flip) % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[rstest]
fn test_round_trip_for_wildcard_free_chains(declarations: Vec<RouteDecl>) {
    let tree = read_routes(&declarations).unwrap();
    let chains = tree.flatten();

    let mut checked = 0;
    for chain in chains.iter().filter(|chain| !chain.has_wildcards()) {
        let segments = chain_to_path(chain).unwrap();
        let path = generate_path(&segments);

        assert!(is_canonical_path(&path), "{path} is not canonical");
        assert_eq!(parse_path(&path).segments, segments);
        checked += 1;
    }
    assert!(checked >= 8);
}

#[rstest]
fn test_id_stacks_resolve_in_any_case(declarations: Vec<RouteDecl>) {
    let tree = read_routes(&declarations).unwrap();
    let chains = tree.flatten();

    for chain in &chains {
        for flip in 0..2 {
            let ids: Vec<RouteId> = chain
                .ids()
                .into_iter()
                .map(|id| RouteId::new(mixed_case(id, flip)))
                .collect();

            let resolved = router_ids_to_chain(&ids, &chains).unwrap();
            assert_eq!(
                resolved,
                chain.clone().with_default_children(),
                "stack {:?}",
                ids
            );
        }
    }
}

#[rstest]
fn test_resolution_is_deterministic(declarations: Vec<RouteDecl>) {
    let first_tree = read_routes(&declarations).unwrap();
    let second_tree = read_routes(&declarations).unwrap();
    assert_eq!(first_tree, second_tree);

    let first = first_tree.flatten();
    let second = second_tree.flatten();

    for path in [
        "/",
        "/schedule",
        "/schedule/session/42",
        "/schedule/filters",
        "/speakers/all%20speakers",
        "/docs/a/b",
        "/account",
        "/missing",
    ] {
        let parsed = parse_path(path);
        let a = router_path_to_chain(&parsed, &first);
        let b = router_path_to_chain(&parsed, &second);
        assert_eq!(a, b, "path {path}");
        assert_eq!(a, router_path_to_chain(&parsed, &first), "path {path}");
    }
}

#[rstest]
#[case("/", &["app-shell", "page-home"])]
#[case("/schedule", &["app-shell", "tab-schedule", "page-schedule"])]
#[case("/schedule/session/42", &["app-shell", "tab-schedule", "page-session"])]
#[case("/speakers/all%20speakers", &["app-shell", "page-speakers"])]
#[case("/docs", &["app-shell", "page-docs"])]
#[case("/docs/guide/intro", &["app-shell", "page-docs"])]
#[case("/login", &["page-account"])]
fn test_resolver_paths(declarations: Vec<RouteDecl>, #[case] path: &str, #[case] expected: &[&str]) {
    let tree = read_routes(&declarations).unwrap();
    let chains = tree.flatten();
    let resolver = Resolver::new(&chains, ResolverConfig::default());

    assert_eq!(resolver.resolve_path(path).unwrap().ids(), expected.to_vec());
}

#[rstest]
fn test_bound_and_static_params_are_merged(declarations: Vec<RouteDecl>) {
    let tree = read_routes(&declarations).unwrap();
    let chains = tree.flatten();
    let resolver = Resolver::new(&chains, ResolverConfig::default());

    let chain = resolver.resolve_path("/schedule/session/42?from=list").unwrap();
    let params = chain.params();
    assert_eq!(params["sessionId"], "42");
    assert_eq!(params["modal"], false);
    assert!(!params.contains_key("from"));

    let account = resolver.resolve_path("/login").unwrap();
    assert_eq!(account.params()["secure"], true);
}

#[rstest]
fn test_redirect_loop_fails_instead_of_hanging(declarations: Vec<RouteDecl>) {
    let tree = read_routes(&declarations).unwrap();
    let chains = tree.flatten();

    for max_redirects in [0, 1, 5, DEFAULT_MAX_REDIRECTS] {
        let resolver = Resolver::new(&chains, ResolverConfig { max_redirects });
        let err = resolver.resolve_path("/r1").unwrap_err();
        assert_eq!(
            err,
            ResolveError::RedirectCycle {
                start: "r1".to_string(),
                max_hops: max_redirects
            }
        );
    }
}

#[rstest]
fn test_structure_errors_surface_at_read_time(declarations: Vec<RouteDecl>) {
    let mut declarations = declarations;
    declarations.push(RouteDecl::new("/again", "PAGE-HOME"));
    assert_eq!(
        read_routes(&declarations).unwrap_err(),
        StructureError::DuplicateId {
            id: "page-home".to_string()
        }
    );
}
