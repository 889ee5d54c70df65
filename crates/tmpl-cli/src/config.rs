//! Compiler configuration file (tmplc.toml)
//!
//! ```toml
//! [runtime]
//! element = "h"
//! api-param = "$api"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tmpl_compiler::RuntimeApi;

/// Parsed configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompilerConfig {
    /// Runtime primitive and parameter names
    #[serde(default)]
    pub runtime: RuntimeApi,
}

impl CompilerConfig {
    /// Parse configuration from TOML text
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load `path`, or defaults if it does not exist
    pub fn load_optional(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid config file {}", path.display()))
    }
}
