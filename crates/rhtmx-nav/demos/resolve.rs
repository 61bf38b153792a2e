//! Resolves paths against a route declaration file
//!
//! ```text
//! RUST_LOG=rhtmx_nav=debug cargo run -p rhtmx-nav --example resolve -- /speaker /map
//! ```
//!
//! Routes come from `routing.routes_file` in `rhtmx-nav.toml`; without one, a small
//! built-in tabbed app is used.

use anyhow::Result;
use rhtmx_nav::{read_routes, Config, Resolver, RouteDecl};
use tracing::info;

fn builtin_routes() -> Vec<RouteDecl> {
    vec![
        RouteDecl::new("/", "page-tabs").with_children([
            RouteDecl::new("/", "tab-schedule").with_child(RouteDecl::new("/", "page-schedule")),
            RouteDecl::new("/speaker", "tab-speaker")
                .with_child(RouteDecl::new("/", "page-speaker-list")),
            RouteDecl::new("/map", "page-map"),
            RouteDecl::new("/about", "page-about"),
        ]),
        RouteDecl::new("/tutorial", "page-tutorial"),
        RouteDecl::redirect("/help", "help", "page-about"),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    let mut declarations = config.load_routes()?;
    if declarations.is_empty() {
        declarations = builtin_routes();
    }

    let tree = read_routes(&declarations)?;
    let chains = tree.flatten();
    let resolver = Resolver::new(&chains, config.resolver.clone());
    info!(nodes = tree.len(), chains = chains.len(), "catalogue ready");

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let paths = if paths.is_empty() {
        vec!["/".to_string(), "/speaker".to_string(), "/help".to_string()]
    } else {
        paths
    };

    for path in &paths {
        match resolver.resolve_path(path) {
            Ok(chain) => {
                let canonical = resolver.path_for_chain(&chain).unwrap_or_default();
                println!("{} -> {} ({})", path, chain.ids().join(" > "), canonical);
            }
            Err(e) => println!("{} -> {}", path, e),
        }
    }

    Ok(())
}
