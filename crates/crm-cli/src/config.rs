use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    pub mock: MockSection,
    pub logging: LoggingSection,
    pub ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockSection {
    /// Delay mock calls the way a backend round trip would
    pub simulate_latency: bool,
}

impl Default for MockSection {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing` filter directive, used when `CRM_LOG` is unset
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self { color: true }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// `--config`/`CRM_CONFIG` when given, else the XDG default.
pub fn resolve_config_path(explicit: Option<&str>) -> anyhow::Result<PathBuf> {
    match explicit.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_config_path(),
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<CrmConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`; a missing file means defaults.
pub fn load_config(path: &Path) -> anyhow::Result<CrmConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(CrmConfig::default())
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("crm"));
        }
    }
    Ok(home_dir()?.join(".config").join("crm"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
