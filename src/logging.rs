use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming the log file. Takes precedence over `[logging] file`.
pub const ENV_LOG_FILE: &str = "TASKDECK_LOG";

const DEFAULT_LEVEL: &str = "info";

/// Initialize tracing with file output.
///
/// The TUI owns stdout, so there is no console sink. Without a log file
/// from `TASKDECK_LOG` or the config, logging stays off.
///
/// `RUST_LOG` wins over `level`; `level` wins over the config.
pub fn init_tracing(config: &LoggingConfig, level: Option<&str>) {
    let path = std::env::var(ENV_LOG_FILE).ok().or_else(|| config.file.clone());
    let Some(path) = path else {
        return;
    };

    let directive = level
        .or(config.level.as_deref())
        .unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {}", path, e);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
