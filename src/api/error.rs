//! Error taxonomy for calls against the task API.

use thiserror::Error;

/// Errors a single API call can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout, TLS).
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// The body was not valid JSON for the expected type.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The body was JSON but not in any accepted envelope shape.
    #[error("Unexpected response shape: expected {expected}")]
    UnexpectedShape { expected: &'static str },

    /// The configured base URL cannot have paths appended to it.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// Collapse the error into the single string a slice stores.
    ///
    /// A message supplied by the server wins; everything else falls back to
    /// the per-operation default.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => default.to_string(),
        }
    }

    /// HTTP status, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Transport { source }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(source: serde_json::Error) -> Self {
        ApiError::Decode { source }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message` first, then a string `error` field.
pub(crate) fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| object.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
