use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::RunError;

/// Environment variable holding the animals API key.
pub const API_KEY_VAR: &str = "FAUNA_API_KEY";

/// Default animals API endpoint (API Ninjas).
pub const DEFAULT_API_URL: &str = "https://api.api-ninjas.com/v1/animals";

/// Global configuration loaded from `~/.config/fauna/config.toml`.
///
/// The API key is deliberately not part of this file; it comes from the
/// `FAUNA_API_KEY` environment variable so the credential never lands on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaunaConfig {
    /// Animals API endpoint URL.
    pub api_url: String,
    /// Path to the HTML template containing the placeholder token.
    pub template_path: PathBuf,
    /// Path the generated page is written to (overwritten each run).
    pub output_path: PathBuf,
}

impl Default for FaunaConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            template_path: PathBuf::from("animals_template.html"),
            output_path: PathBuf::from("animals.html"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fauna")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FaunaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FaunaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FaunaConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Resolve the API key from the environment.
///
/// Absence (or an empty value) is a fatal startup condition: the caller is
/// expected to exit non-zero without producing any output.
pub fn api_key_from_env() -> Result<String, RunError> {
    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(RunError::Startup(format!(
            "{API_KEY_VAR} is not set; export your animals API key before running"
        ))),
    }
}
