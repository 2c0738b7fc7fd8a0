use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// API endpoint used when the config file doesn't set one
pub const DEFAULT_API_URL: &str = "https://api.stratus.dev";

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("stratus"))
}

/// CLI configuration, stored at `~/.config/stratus/config.toml`.
///
/// Environment variables (`STRATUS_API_URL`, `STRATUS_TOKEN`,
/// `STRATUS_TEAM`, `STRATUS_PROJECT`) override file values; command-line
/// flags override both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            team: None,
            project: None,
        }
    }
}

impl Config {
    /// Path of the config file
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load a config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config format in {}", path.display()))
    }

    /// Save the config to its default location
    pub fn save(&self) -> Result<()> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)?;
        self.save_to(&dir.join("config.toml"))
    }

    /// Save the config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Could not write {}", path.display()))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_url) = std::env::var("STRATUS_API_URL") {
            self.api_url = api_url;
        }
        if let Ok(token) = std::env::var("STRATUS_TOKEN") {
            self.token = Some(token);
        }
        if let Ok(team) = std::env::var("STRATUS_TEAM") {
            self.team = Some(team);
        }
        if let Ok(project) = std::env::var("STRATUS_PROJECT") {
            self.project = Some(project);
        }
    }
}
