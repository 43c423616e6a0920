use serde::{Deserialize, Serialize};

use crate::config::credentials::SecureString;
use crate::store::ThemeMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the task API lives and how to talk to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to (e.g. "http://localhost:5000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Credential passed through as `Authorization: Bearer <token>`.
    #[serde(default)]
    pub auth_token: Option<SecureString>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Theme used when no preference has been persisted yet.
    #[serde(default)]
    pub theme: ThemeMode,
}

/// File logging. The TUI owns stdout, so there is no console sink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default)]
    pub level: Option<String>,
    /// Log file path. `TASKDECK_LOG` takes precedence.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            auth_token: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            theme: ThemeMode::default(),
        }
    }
}
