use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::similarity::SIMILARITY_THRESHOLD;

pub const CONFIG_FILE: &str = "config.toml";

/// Optional per-catalog settings, read from `config.toml` inside the
/// `.designbook/` directory. A missing file means defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Similarity percentage above which entries are flagged as near
    /// duplicates during `add` and `check`.
    pub similarity_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
