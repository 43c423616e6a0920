use crate::model::{Comment, CreateComment};

use super::client::ApiClient;
use super::envelope::{decode_list, decode_one};
use super::error::ApiError;

const COMMENTS: &str = "comments";

/// Gateway for `/comments`.
///
/// Listing and creating are keyed by task id, deleting by comment id.
#[derive(Clone)]
pub struct CommentApi {
    client: ApiClient,
}

impl CommentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_for_task(&self, task_id: &str) -> Result<Vec<Comment>, ApiError> {
        let body = self.client.get(&[COMMENTS, task_id]).await?;
        decode_list(&body)
    }

    pub async fn create(&self, task_id: &str, payload: &CreateComment) -> Result<Comment, ApiError> {
        let body = self.client.post(&[COMMENTS, task_id], payload).await?;
        decode_one(&body)
    }

    pub async fn delete(&self, comment_id: &str) -> Result<(), ApiError> {
        self.client.delete(&[COMMENTS, comment_id]).await.map(drop)
    }
}
