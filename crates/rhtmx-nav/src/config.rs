// File: src/config.rs
// Purpose: Resolver configuration parsing from rhtmx-nav.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::redirect::DEFAULT_MAX_REDIRECTS;
use crate::RouteDecl;

/// Navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Resolution behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfig {
    /// Maximum redirect hops before resolution fails (default: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

/// Where route declarations come from
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoutingConfig {
    /// JSON or TOML route declaration file, relative to the working directory
    #[serde(default)]
    pub routes_file: Option<PathBuf>,
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_redirects: default_max_redirects(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rhtmx-nav.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx-nav.toml")
    }

    /// Reads the declarations named by `routing.routes_file`
    ///
    /// Returns an empty list when no file is configured.
    pub fn load_routes(&self) -> Result<Vec<RouteDecl>> {
        match &self.routing.routes_file {
            Some(path) => RouteDecl::load_file(path),
            None => Ok(Vec::new()),
        }
    }
}
