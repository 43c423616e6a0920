use crate::api::TaskApi;
use crate::model::{CreateTask, Task, UpdateTask};

use super::cell::{ChangeListener, OpResult, StateCell};
use super::intent::SliceIntent;
use super::reducer::SliceReducer;
use super::slice::{Operation, RequestId, ResourceSlice};

pub const FETCH_TASKS_ERROR: &str = "Failed to fetch tasks";
pub const FETCH_TASK_ERROR: &str = "Failed to fetch task";
pub const CREATE_TASK_ERROR: &str = "Failed to create task";
pub const UPDATE_TASK_ERROR: &str = "Failed to update task";
pub const DELETE_TASK_ERROR: &str = "Failed to delete task";

/// Task slice and the operations that keep it in sync with the server.
#[derive(Clone)]
pub struct TaskStore {
    cell: StateCell<SliceReducer<Task>>,
    api: TaskApi,
}

impl TaskStore {
    pub fn new(api: TaskApi, listener: Option<ChangeListener>) -> Self {
        Self {
            cell: StateCell::new("tasks", listener),
            api,
        }
    }

    pub fn state(&self) -> ResourceSlice<Task> {
        self.cell.snapshot()
    }

    pub async fn fetch_all(&self) -> OpResult<Vec<Task>> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::FetchAll,
                },
                self.api.list(),
                FETCH_TASKS_ERROR,
                |items: &Vec<Task>| SliceIntent::FetchedAll {
                    request,
                    items: items.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn fetch_one(&self, id: &str) -> OpResult<Task> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::FetchOne,
                },
                self.api.get(id),
                FETCH_TASK_ERROR,
                |item: &Task| SliceIntent::FetchedOne {
                    request,
                    item: item.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn create(&self, payload: CreateTask) -> OpResult<Task> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::Create,
                },
                self.api.create(&payload),
                CREATE_TASK_ERROR,
                |item: &Task| SliceIntent::Created {
                    request,
                    item: item.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn update(&self, id: &str, patch: UpdateTask) -> OpResult<Task> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::Update,
                },
                self.api.update(id, &patch),
                UPDATE_TASK_ERROR,
                |item: &Task| SliceIntent::Updated {
                    request,
                    item: item.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> OpResult<()> {
        let request = RequestId::new();
        let deleted = id.to_string();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::Delete,
                },
                self.api.delete(id),
                DELETE_TASK_ERROR,
                move |_: &()| SliceIntent::Deleted {
                    request,
                    id: deleted,
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub fn set_current(&self, task: Option<Task>) {
        self.cell.dispatch(SliceIntent::SetCurrent(task));
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(SliceIntent::ClearError);
    }

    pub fn reset(&self) {
        self.cell.dispatch(SliceIntent::Reset);
    }
}
