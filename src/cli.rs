//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ENV_API_TOKEN, ENV_API_URL};
use crate::ui::routes::Route;

/// Terminal client for the task-management API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the API (overrides config)
    #[arg(long, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// Bearer token passed through to the API (overrides config)
    #[arg(long, env = ENV_API_TOKEN, hide_env_values = true)]
    pub api_token: Option<String>,

    /// Screen to open, e.g. /tasks, /tasks/new, /users, /dashboard
    #[arg(short, long, default_value = "/")]
    pub route: Route,

    /// Log filter directive (overrides config, e.g. "debug" or "taskdeck=trace")
    #[arg(long)]
    pub log_level: Option<String>,
}
