//! Terminal client for a task-management REST API.
//!
//! Stores in [`store`] keep a client-side copy of the server's tasks, users,
//! comments and report, updated through reducers in [`mvi`]. Gateways in
//! [`api`] perform the HTTP calls. [`ui`] renders the stores with ratatui.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod store;
pub mod ui;
