use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserSummary;
use super::Entity;

/// Task priority as the API spells it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task workflow status.
///
/// The server uses `"In Progress"` on the wire; `"InProgress"` is accepted too.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Done];

    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who a task is assigned to.
///
/// Depending on the endpoint the server either populates the user or returns
/// the raw reference it was created with (an id or an email). A populate
/// whose user has since been deleted comes back as `null`. The shape is
/// settled once while decoding, views never inspect the JSON again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Assignee {
    Embedded(UserSummary),
    Reference(String),
    #[default]
    Unassigned,
}

impl Assignee {
    /// Human-readable name for lists and detail panes.
    pub fn label(&self) -> &str {
        match self {
            Assignee::Embedded(user) => &user.name,
            Assignee::Reference(reference) => reference,
            Assignee::Unassigned => "Unassigned",
        }
    }

    /// Value to prefill the assignee field of the edit form with.
    pub fn email(&self) -> &str {
        match self {
            Assignee::Embedded(user) => &user.email,
            Assignee::Reference(reference) => reference,
            Assignee::Unassigned => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assigned_to: Assignee,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub priority: Priority,
}

/// Body of `PUT /tasks/{id}`. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
