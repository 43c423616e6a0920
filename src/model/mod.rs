//! Domain types mirrored from the task API.
//!
//! All of these are server owned; the client only keeps cached copies.

mod comment;
mod report;
mod task;
mod user;

pub use comment::{Comment, CreateComment};
pub use report::{TaskReport, UserTaskCount};
pub use task::{Assignee, CreateTask, Priority, Status, Task, UpdateTask};
pub use user::{CreateUser, User, UserSummary};

/// A server entity that lives in a resource slice.
pub trait Entity: Clone + PartialEq + Send + 'static {
    /// Server-assigned identifier.
    fn id(&self) -> &str;
}
