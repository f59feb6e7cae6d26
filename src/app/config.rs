use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
    follow_links: Option<bool>,
}

/// `~/.config/src_chmod/config.toml`
fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("src_chmod").join("config.toml"))
}

/// Reads the config at `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<RuntimeConfig> {
    if !path.exists() {
        return Ok(RuntimeConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;

    let parsed: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {:?}", path))?;

    let defaults = RuntimeConfig::default();
    Ok(RuntimeConfig {
        log_level: parsed.log_level.unwrap_or(defaults.log_level),
        follow_links: parsed.follow_links.unwrap_or(defaults.follow_links),
    })
}

pub fn resolve_config() -> Result<RuntimeConfig> {
    load_config_from(&config_path()?)
}
