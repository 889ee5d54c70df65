//! `tmplc config`: print the effective runtime configuration.

use crate::config::CompilerConfig;
use std::path::Path;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let config = CompilerConfig::load_optional(path)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
