use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tradify_engine::RatingMatch;

/// Recipient of contact-form mail unless the config overrides it
pub const DEFAULT_RECIPIENT: &str = "hello@tradify.shop";

/// Rating the "Discover Top Picks" trigger filters on
pub const DEFAULT_TOP_RATING: f64 = 5.0;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TRADIFY_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.tradify (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TRADIFY_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tradify"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tradify"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Storefront JSON replacing the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_top_rating")]
    pub top_rating: f64,
    #[serde(default)]
    pub rating_match: RatingMatch,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            top_rating: DEFAULT_TOP_RATING,
            rating_match: RatingMatch::Exact,
        }
    }
}

fn default_top_rating() -> f64 {
    DEFAULT_TOP_RATING
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

fn default_recipient() -> String {
    DEFAULT_RECIPIENT.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !self.grid.top_rating.is_finite() {
            return Err(Error::Config("grid.top_rating must be a number".to_string()));
        }
        if self.contact.recipient.trim().is_empty() {
            return Err(Error::Config("contact.recipient must not be empty".to_string()));
        }
        Ok(())
    }
}
