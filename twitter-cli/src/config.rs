// twitter-cli/src/config.rs
use anyhow::{anyhow, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use twitter_client::DEFAULT_API_URL;

const TOKEN_ENV: &str = "TWITTER_BEARER_TOKEN";
const API_URL_ENV: &str = "TWITTER_API_URL";

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// Bearer token sent with every request
    #[serde(default)]
    pub token: String,
    /// API root, defaults to the public v1.1 endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Load the config file, creating a default one on first run, then
    /// apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(std::env::var(TOKEN_ENV).ok(), std::env::var(API_URL_ENV).ok());
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// File contents only; environment overrides are not applied
    fn load_from(config_path: &Path) -> Result<Self> {
        if let Some(dir) = config_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        if config_path.exists() {
            Self::from_toml(&fs::read_to_string(config_path)?)
        } else {
            let default = Self::default();
            default.save_to(config_path)?;
            Ok(default)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, token: Option<String>, api_url: Option<String>) {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = token;
        }
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = Some(url);
        }
    }

    /// Store a new token, keeping the rest of the file as it is on disk.
    /// Values that came from the environment are never written back.
    pub fn save_token(token: String) -> Result<()> {
        Self::save_token_to(&Self::config_path()?, token)
    }

    fn save_token_to(config_path: &Path, token: String) -> Result<()> {
        let mut config = Self::load_from(config_path)?;
        config.token = token;
        config.save_to(config_path)
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;

        // Set permissions to 600 (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(config_path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(config_path, perms)?;
        }

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("Cannot determine config directory"))?;
        Ok(base_dirs.config_dir().join("twitter-cli").join("config.toml"))
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn require_token(&self) -> Result<&str> {
        if self.token.is_empty() {
            return Err(anyhow!(
                "No bearer token configured. Run `twitter setup` or set {}",
                TOKEN_ENV
            ));
        }
        Ok(&self.token)
    }
}
