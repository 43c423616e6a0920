use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::task::{Priority, Status};

/// Server-side aggregate over all tasks. Read only, fetched wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub tasks_by_status: HashMap<Status, u64>,
    #[serde(default)]
    pub tasks_by_priority: HashMap<Priority, u64>,
    #[serde(default)]
    pub tasks_by_user: Vec<UserTaskCount>,
}

impl TaskReport {
    pub fn status_count(&self, status: Status) -> u64 {
        self.tasks_by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> u64 {
        self.tasks_by_priority.get(&priority).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTaskCount {
    pub user_id: String,
    pub user_name: String,
    pub task_count: u64,
}
