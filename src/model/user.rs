use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact: String,
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The user fields a task carries when the server populates its assignee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
}
