//! Configuration loading for Secure Text

mod schema;

pub use schema::{Config, EffectiveConfig, OutputFormat, DEFAULT_SHIFT};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".securetextrc.json";

/// Load the config file. Uses `custom_path` when given, otherwise searches
/// `work_dir` and its parents; no file at all yields the defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .securetextrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Starter config written by `secure-text init`
pub fn starter_config(shift: Option<i64>) -> Result<String> {
    let config = Config {
        default_shift: Some(shift.unwrap_or(DEFAULT_SHIFT)),
        format: Some(OutputFormat::Console),
        color: Some(true),
    };
    let mut json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    json.push('\n');
    Ok(json)
}
