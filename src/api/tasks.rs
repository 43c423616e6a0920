use crate::model::{CreateTask, Task, UpdateTask};

use super::client::ApiClient;
use super::envelope::{decode_list, decode_one};
use super::error::ApiError;

const TASKS: &str = "tasks";

/// Gateway for `/tasks`.
#[derive(Clone)]
pub struct TaskApi {
    client: ApiClient,
}

impl TaskApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let body = self.client.get(&[TASKS]).await?;
        decode_list(&body)
    }

    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        let body = self.client.get(&[TASKS, id]).await?;
        decode_one(&body)
    }

    pub async fn create(&self, payload: &CreateTask) -> Result<Task, ApiError> {
        let body = self.client.post(&[TASKS], payload).await?;
        decode_one(&body)
    }

    pub async fn update(&self, id: &str, patch: &UpdateTask) -> Result<Task, ApiError> {
        let body = self.client.put(&[TASKS, id], patch).await?;
        decode_one(&body)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&[TASKS, id]).await.map(drop)
    }
}
