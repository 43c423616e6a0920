use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub content: String,
    #[serde(alias = "taskId", default)]
    pub task_id: String,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /comments/{taskId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateComment {
    pub content: String,
}
