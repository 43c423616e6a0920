//! Gateway clients for the task API.
//!
//! One client per resource. Each method performs exactly one HTTP call and
//! returns the unwrapped domain type; no caching, retries or batching.
//!
//! ```text
//! TaskApi ─┐
//! UserApi ─┼─→ ApiClient (reqwest) ─→ envelope::decode_* ─→ model types
//! ...     ─┘
//! ```

mod client;
mod comments;
pub mod envelope;
mod error;
mod reports;
mod tasks;
mod users;

pub use client::ApiClient;
pub use comments::CommentApi;
pub use error::ApiError;
pub use reports::ReportApi;
pub use tasks::TaskApi;
pub use users::UserApi;

/// All resource gateways built over one shared connection pool.
#[derive(Clone)]
pub struct Gateways {
    pub tasks: TaskApi,
    pub users: UserApi,
    pub comments: CommentApi,
    pub reports: ReportApi,
}

impl Gateways {
    pub fn new(client: ApiClient) -> Self {
        Self {
            tasks: TaskApi::new(client.clone()),
            users: UserApi::new(client.clone()),
            comments: CommentApi::new(client.clone()),
            reports: ReportApi::new(client),
        }
    }
}
