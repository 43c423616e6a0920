//! Configuration: TOML file plus environment and command-line overrides.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::{ConfigError, ENV_API_TOKEN, ENV_API_URL};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
