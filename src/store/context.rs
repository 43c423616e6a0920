use crate::api::{ApiClient, ApiError, Gateways};
use crate::config::Config;

use super::cell::ChangeListener;
use super::comments::CommentStore;
use super::report::ReportStore;
use super::tasks::TaskStore;
use super::theme::{ThemePreference, ThemeStore};
use super::users::UserStore;

/// Every store the views talk to, built once and handed to the `App`.
#[derive(Clone)]
pub struct AppContext {
    pub tasks: TaskStore,
    pub users: UserStore,
    pub comments: CommentStore,
    pub report: ReportStore,
    pub theme: ThemeStore,
}

impl AppContext {
    pub fn new(gateways: Gateways, theme: ThemeStore, listener: Option<ChangeListener>) -> Self {
        Self {
            tasks: TaskStore::new(gateways.tasks, listener.clone()),
            users: UserStore::new(gateways.users, listener.clone()),
            comments: CommentStore::new(gateways.comments, listener.clone()),
            report: ReportStore::new(gateways.reports, listener),
            theme,
        }
    }

    /// Build the HTTP client and the theme preference from `config`.
    pub fn from_config(config: &Config, listener: Option<ChangeListener>) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api)?;
        tracing::info!(base_url = %client.base_url(), "API client ready");

        let preference = ThemePreference::in_dir(&Config::config_dir());
        let theme = ThemeStore::new(Some(preference), config.ui.theme, listener.clone());

        Ok(Self::new(Gateways::new(client), theme, listener))
    }

    /// Clear every resource slice. The theme is a preference, not server
    /// data, and survives.
    pub fn reset(&self) {
        self.tasks.reset();
        self.users.reset();
        self.comments.reset();
        self.report.reset();
    }
}
