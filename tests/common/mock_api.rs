//! In-process stand-in for the task REST API, served by axum on an
//! ephemeral port.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tokio::sync::{oneshot, Mutex};

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json("[]")
    }
}

impl MockResponse {
    fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay_ms: 0,
        }
    }

    pub fn json(body: &str) -> Self {
        Self::with_status(200, body)
    }

    /// Success with an empty body, as DELETE returns.
    pub fn empty() -> Self {
        Self::with_status(200, "")
    }

    /// Failure carrying `{"message": ...}`.
    pub fn error(status: u16, message: &str) -> Self {
        Self::with_status(status, serde_json::json!({ "message": message }).to_string())
    }

    /// Failure without a message the client could show.
    pub fn bare_status(status: u16) -> Self {
        Self::with_status(status, "")
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.body.is_empty() {
            return status.into_response();
        }
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

#[derive(Default)]
struct Script {
    seen: Vec<CapturedRequest>,
    fixed: HashMap<(String, String), MockResponse>,
    queued: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Script>>;

/// A request is answered by the fixed response registered for its method and
/// path, else by the next queued response, else with `200 []`.
pub struct MockApi {
    pub addr: SocketAddr,
    script: Shared,
    stop: Option<oneshot::Sender<()>>,
}

impl MockApi {
    pub async fn start() -> Self {
        let script = Shared::default();
        let router = Router::new()
            .fallback(any(answer))
            .with_state(Arc::clone(&script));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            addr,
            script,
            stop: Some(stop),
        }
    }

    /// Base URL including the `/api` prefix the client is configured with.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Answer every `method path` request with `resp`.
    pub async fn respond(&self, method: &str, path: &str, resp: MockResponse) {
        self.script
            .lock()
            .await
            .fixed
            .insert((method.to_string(), path.to_string()), resp);
    }

    /// Answer the next request without a fixed response with `resp`.
    pub async fn enqueue(&self, resp: MockResponse) {
        self.script.lock().await.queued.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.lock().await.seen.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.script.lock().await.seen.len()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn answer(
    State(script): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> MockResponse {
    let key = (method.to_string(), uri.path().to_string());
    let response = {
        let mut script = script.lock().await;
        script.seen.push(CapturedRequest {
            method: key.0.clone(),
            path: key.1.clone(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
                .collect(),
            body: body.to_vec(),
        });
        match script.fixed.get(&key) {
            Some(fixed) => fixed.clone(),
            None => script.queued.pop_front().unwrap_or_default(),
        }
    };

    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }
    response
}
