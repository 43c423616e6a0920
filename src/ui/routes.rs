use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A screen of the client, addressed by a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Tasks,
    TaskNew,
    TaskDetail(String),
    TaskEdit(String),
    Users,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route '{0}'")]
pub struct UnknownRoute(pub String);

impl Route {
    /// `/` is an alias of `/tasks`. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["tasks"] => Some(Route::Tasks),
            ["tasks", "new"] => Some(Route::TaskNew),
            ["tasks", id] => Some(Route::TaskDetail((*id).to_string())),
            ["tasks", id, "edit"] => Some(Route::TaskEdit((*id).to_string())),
            ["users"] => Some(Route::Users),
            ["dashboard"] => Some(Route::Dashboard),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Tasks => "/tasks".to_string(),
            Route::TaskNew => "/tasks/new".to_string(),
            Route::TaskDetail(id) => format!("/tasks/{id}"),
            Route::TaskEdit(id) => format!("/tasks/{id}/edit"),
            Route::Users => "/users".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
        }
    }

    /// Top-level section, used to highlight the navigation bar.
    pub fn section(&self) -> Section {
        match self {
            Route::Tasks | Route::TaskNew | Route::TaskDetail(_) | Route::TaskEdit(_) => {
                Section::Tasks
            }
            Route::Users => Section::Users,
            Route::Dashboard => Section::Dashboard,
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tasks,
    Users,
    Dashboard,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Tasks, Section::Users, Section::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            Section::Tasks => "Tasks",
            Section::Users => "Users",
            Section::Dashboard => "Dashboard",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Section::Tasks => Route::Tasks,
            Section::Users => Route::Users,
            Section::Dashboard => Route::Dashboard,
        }
    }
}
