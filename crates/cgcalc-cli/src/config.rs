//! Presentation settings.
//!
//! Nothing here affects how a CG is computed; the grade scale is fixed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level cgcalc configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgcalcConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Colour the result band in terminal tables.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Largest course count the interactive session accepts.
    #[serde(default = "default_max_courses")]
    pub max_courses: usize,
}

fn default_format() -> String {
    "text".to_string()
}
fn default_color() -> bool {
    true
}
fn default_max_courses() -> usize {
    10
}

impl Default for CgcalcConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            color: default_color(),
            max_courses: default_max_courses(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `cgcalc.toml` in the current directory
/// 2. `~/.config/cgcalc/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<CgcalcConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("cgcalc.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<CgcalcConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => CgcalcConfig::default(),
    };

    anyhow::ensure!(config.max_courses >= 1, "max_courses must be at least 1");

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("cgcalc"))
}
