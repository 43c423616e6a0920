use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;

use crate::config::{ApiConfig, SecureString};

use super::error::{extract_message, ApiError};

/// Shared HTTP plumbing for the per-resource clients.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = parse_base(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(value) = auth_header(config.auth_token.as_ref()) {
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub(crate) async fn get(&self, segments: &[&str]) -> Result<Vec<u8>, ApiError> {
        self.send(Method::GET, segments, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Vec<u8>, ApiError> {
        self.send(Method::POST, segments, Some(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Vec<u8>, ApiError> {
        self.send(Method::PUT, segments, Some(body)).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<Vec<u8>, ApiError> {
        self.send(Method::DELETE, segments, None::<&()>).await
    }

    /// Issue exactly one request and return the raw success body.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.url(segments)?;
        tracing::debug!(%method, %url, "api request");

        let mut builder: RequestBuilder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(%method, %url, error = %source, "api request failed");
            ApiError::Transport { source }
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = extract_message(&bytes);
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "api returned error status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::trace!(%method, %url, status = status.as_u16(), len = bytes.len(), "api response");
        Ok(bytes.to_vec())
    }

    /// Append percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "cannot be a base".to_string(),
        });
    }
    Ok(url)
}

fn auth_header(token: Option<&SecureString>) -> Option<HeaderValue> {
    let token = token.filter(|t| !t.is_empty())?;
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose())).ok()?;
    value.set_sensitive(true);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn url_appends_segments_with_or_without_trailing_slash() {
        let a = client("http://localhost:5000/api");
        let b = client("http://localhost:5000/api/");
        assert_eq!(
            a.url(&["tasks", "42"]).unwrap().as_str(),
            "http://localhost:5000/api/tasks/42"
        );
        assert_eq!(
            b.url(&["tasks", "42"]).unwrap().as_str(),
            "http://localhost:5000/api/tasks/42"
        );
    }

    #[test]
    fn url_encodes_segments() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.url(&["tasks", "a/b"]).unwrap().as_str(),
            "http://localhost:5000/tasks/a%2Fb"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        let result = ApiClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn blank_token_sends_no_auth_header() {
        assert!(auth_header(Some(&SecureString::new("  "))).is_none());
        assert!(auth_header(None).is_none());
        let value = auth_header(Some(&SecureString::new("abc"))).unwrap();
        assert!(value.is_sensitive());
    }
}
