/// External route declarations
///
/// The UI layer owns its route tree. The engine sees it only through [`RouteElement`],
/// and ships [`RouteDecl`] as the plain serde-backed implementation used for
/// declaration files and tests.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Params;

/// Read-only view of one externally owned route declaration
///
/// Implement this for whatever node type the presentation layer uses. The reader copies
/// every field it needs, so no reference into the external structure is kept.
pub trait RouteElement {
    /// Screen id (case-insensitive)
    fn route_id(&self) -> &str;

    /// Path pattern such as `/speaker/:id`; empty or `/` contributes no segments
    fn route_path(&self) -> &str;

    /// Redirect target (an id or a path)
    fn redirect_to(&self) -> Option<&str>;

    /// Static params merged into every match of this node
    fn static_params(&self) -> Params;

    /// Child declarations in declaration order
    fn child_routes(&self) -> Vec<&Self>;
}

/// Plain route declaration
///
/// # Examples
///
/// ```
/// use rhtmx_nav::RouteDecl;
///
/// let tabs = RouteDecl::new("/", "page-tabs")
///     .with_child(RouteDecl::new("/speaker", "tab-speaker"))
///     .with_child(RouteDecl::new("/map", "page-map").with_param("zoom", 12));
///
/// assert_eq!(tabs.children.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDecl {
    /// Screen id
    #[serde(alias = "component")]
    pub id: String,

    /// Path pattern
    #[serde(default)]
    pub path: String,

    /// Redirect target
    #[serde(default, alias = "redirectTo", skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,

    /// Static params
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,

    /// Children in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDecl>,
}

/// Top-level shape of a TOML declaration file (`[[routes]]` tables)
#[derive(Debug, Default, Deserialize)]
struct RouteFile {
    #[serde(default)]
    routes: Vec<RouteDecl>,
}

impl RouteDecl {
    /// Creates a declaration with a path pattern and an id
    pub fn new(path: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Creates a redirect declaration
    pub fn redirect(path: impl Into<String>, id: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(path, id).with_redirect(to)
    }

    /// Sets the redirect target
    pub fn with_redirect(mut self, to: impl Into<String>) -> Self {
        self.redirect_to = Some(to.into());
        self
    }

    /// Sets a static param
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Appends a child
    pub fn with_child(mut self, child: RouteDecl) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children, keeping their order
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteDecl>,
    {
        self.children.extend(children);
        self
    }

    /// Parses a single declaration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse route declaration JSON")
    }

    /// Parses a list of root declarations from JSON
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).context("Failed to parse route declaration list JSON")
    }

    /// Parses root declarations from a TOML document with `[[routes]]` tables
    pub fn list_from_toml_str(source: &str) -> Result<Vec<Self>> {
        let file: RouteFile =
            toml::from_str(source).context("Failed to parse route declaration TOML")?;
        Ok(file.routes)
    }

    /// Loads root declarations from a `.json` or `.toml` file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route file: {:?}", path))?;

        let routes = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::list_from_toml_str(&content),
            _ => Self::list_from_json_str(&content),
        };

        routes.with_context(|| format!("Invalid route file: {:?}", path))
    }
}

impl RouteElement for RouteDecl {
    fn route_id(&self) -> &str {
        &self.id
    }

    fn route_path(&self) -> &str {
        &self.path
    }

    fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    fn static_params(&self) -> Params {
        self.params.clone()
    }

    fn child_routes(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}
