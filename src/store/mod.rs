//! Client-side stores, one per resource.
//!
//! Each store keeps its state in a [`StateCell`], changes it only through a
//! reducer and exposes the network operations as `async fn`s. An operation
//! dispatches `Requested`, awaits one gateway call and then dispatches the
//! resolved or rejected intent, all tagged with the same [`RequestId`].

mod cell;
mod comments;
mod context;
mod intent;
mod reducer;
mod report;
mod slice;
mod tasks;
mod theme;
mod users;

pub use cell::{ChangeListener, OpError, OpResult, StateCell};
pub use comments::{CommentStore, ADD_COMMENT_ERROR, DELETE_COMMENT_ERROR, FETCH_COMMENTS_ERROR};
pub use context::AppContext;
pub use intent::SliceIntent;
pub use reducer::SliceReducer;
pub use report::{ReportIntent, ReportReducer, ReportState, ReportStore, FETCH_REPORT_ERROR};
pub use slice::{Operation, RequestId, ResourceSlice};
pub use tasks::{
    TaskStore, CREATE_TASK_ERROR, DELETE_TASK_ERROR, FETCH_TASKS_ERROR, FETCH_TASK_ERROR,
    UPDATE_TASK_ERROR,
};
pub use theme::{ThemeError, ThemeIntent, ThemeMode, ThemePreference, ThemeReducer, ThemeStore};
pub use users::{UserStore, CREATE_USER_ERROR, FETCH_USERS_ERROR, FETCH_USER_ERROR};
