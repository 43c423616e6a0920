use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::credentials::SecureString;
use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "TASKDECK_API_URL";
/// Environment variable overriding `api.auth_token`.
pub const ENV_API_TOKEN: &str = "TASKDECK_API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid config: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// Directory holding the config file and the theme preference.
    ///
    /// `~/.config/taskdeck` on Linux, the platform equivalent elsewhere via
    /// `dirs::config_dir()`, or the current directory as a last resort.
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("taskdeck")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// A missing file means defaults; a present one must parse and validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Overrides the API location and credential. Blank values are ignored.
    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api.auth_token = Some(SecureString::new(token.trim()));
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must start with http:// or https://, got '{url}'"
            )));
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "api timeouts must be greater than zero".into(),
            ));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "ui.tick_rate_ms must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
