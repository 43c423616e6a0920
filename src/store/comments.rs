use crate::api::CommentApi;
use crate::model::{Comment, CreateComment};

use super::cell::{ChangeListener, OpResult, StateCell};
use super::intent::SliceIntent;
use super::reducer::SliceReducer;
use super::slice::{Operation, RequestId, ResourceSlice};

pub const FETCH_COMMENTS_ERROR: &str = "Failed to fetch comments";
pub const ADD_COMMENT_ERROR: &str = "Failed to add comment";
pub const DELETE_COMMENT_ERROR: &str = "Failed to delete Comment";

/// Comments of the task currently on screen.
#[derive(Clone)]
pub struct CommentStore {
    cell: StateCell<SliceReducer<Comment>>,
    api: CommentApi,
}

impl CommentStore {
    pub fn new(api: CommentApi, listener: Option<ChangeListener>) -> Self {
        Self {
            cell: StateCell::new("comments", listener),
            api,
        }
    }

    pub fn state(&self) -> ResourceSlice<Comment> {
        self.cell.snapshot()
    }

    /// Replace the slice with the comments of `task_id`.
    pub async fn fetch_for_task(&self, task_id: &str) -> OpResult<Vec<Comment>> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::FetchAll,
                },
                self.api.list_for_task(task_id),
                FETCH_COMMENTS_ERROR,
                |items: &Vec<Comment>| SliceIntent::FetchedAll {
                    request,
                    items: items.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn create(&self, task_id: &str, content: &str) -> OpResult<Comment> {
        let request = RequestId::new();
        let payload = CreateComment {
            content: content.to_string(),
        };
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::Create,
                },
                self.api.create(task_id, &payload),
                ADD_COMMENT_ERROR,
                |item: &Comment| SliceIntent::Created {
                    request,
                    item: item.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> OpResult<()> {
        let request = RequestId::new();
        let deleted = comment_id.to_string();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::Delete,
                },
                self.api.delete(comment_id),
                DELETE_COMMENT_ERROR,
                move |_: &()| SliceIntent::Deleted {
                    request,
                    id: deleted,
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(SliceIntent::ClearError);
    }

    pub fn reset(&self) {
        self.cell.dispatch(SliceIntent::Reset);
    }
}
