//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::time::{Duration, Instant};

use serde_json::json;
use taskdeck::api::{ApiClient, Gateways};
use taskdeck::config::{ApiConfig, SecureString};
use taskdeck::store::{AppContext, ChangeListener, ThemeMode, ThemeStore};
use taskdeck::ui::app::App;
use taskdeck::ui::events::EventHandler;

pub use mock_api::{CapturedRequest, MockApi, MockResponse};

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        auth_token: None,
    }
}

/// Stores wired to `api`, with an in-memory theme.
pub fn context_for(api: &MockApi, listener: Option<ChangeListener>) -> AppContext {
    context_with(api_config(&api.base_url()), listener)
}

pub fn context_with(config: ApiConfig, listener: Option<ChangeListener>) -> AppContext {
    let client = ApiClient::new(&config).expect("mock base url is valid");
    let theme = ThemeStore::new(None, ThemeMode::Light, listener.clone());
    AppContext::new(Gateways::new(client), theme, listener)
}

pub fn task_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("{title} description"),
        "assigned_to": {"_id": "u1", "name": "Ada", "email": "ada@example.com"},
        "priority": "Medium",
        "status": "Open",
        "createdAt": "2024-05-01T10:00:00.000Z"
    })
}

pub fn user_json(id: &str, name: &str, email: &str) -> serde_json::Value {
    json!({"_id": id, "name": name, "email": email, "contact": "555-0100"})
}

pub fn comment_json(id: &str, task_id: &str, content: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "content": content,
        "taskId": task_id,
        "createdAt": "2024-05-02T09:30:00.000Z"
    })
}

/// An `App` driven by the test instead of a terminal.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
}

impl Harness {
    /// Must be called from inside a multi-threaded tokio runtime.
    pub fn new(api: &MockApi) -> Self {
        let events = EventHandler::detached();
        let ctx = context_for(api, Some(events.listener()));
        let app = App::new(ctx, tokio::runtime::Handle::current(), events.sender());
        Self { app, events }
    }

    /// Feed queued events to the app until `done` holds or two seconds pass.
    pub fn pump_until(&mut self, mut done: impl FnMut(&App) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if done(&self.app) {
                return true;
            }
            if let Ok(event) = self.events.next(Duration::from_millis(20)) {
                self.app.on_event(event);
            }
        }
        done(&self.app)
    }
}
