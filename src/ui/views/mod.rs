//! Screens of the client.
//!
//! Views own only local state (form values, filters, selections, open
//! dialogs). They read store snapshots to render, and turn key presses into
//! [`Command`]s that the `App` executes against the stores.

pub mod confirm;
pub mod dashboard;
pub mod input;
pub mod task_detail;
pub mod task_form;
pub mod task_list;
pub mod users;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::model::{CreateUser, Status};
use crate::ui::routes::Route;
use crate::ui::theme::Palette;

pub use confirm::{ConfirmIntent, ConfirmReducer, ConfirmState, PendingDelete};
pub use task_form::TaskSubmission;

/// Work a view asks the `App` to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(Route),
    /// Re-run the fetches of the current route.
    Refresh,
    SaveTask(TaskSubmission),
    AddComment { task_id: String, content: String },
    /// Open the confirmation dialog; the store op runs only once confirmed.
    Confirm(PendingDelete),
    CreateUser(CreateUser),
}

/// Move a list cursor by `delta`, clamped to `len`.
pub(crate) fn step(selected: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(delta).min(len - 1)
}

pub(crate) fn is_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

pub(crate) fn is_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

/// One status line: the slice error if any, else a loading hint.
pub(crate) fn status_line(
    error: Option<&str>,
    busy: Option<&'static str>,
    palette: &Palette,
) -> Line<'static> {
    match (error, busy) {
        (Some(error), _) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(palette.error),
        )),
        (None, Some(busy)) => Line::from(Span::styled(
            format!(" {busy}"),
            Style::default().fg(palette.muted),
        )),
        (None, None) => Line::default(),
    }
}

pub(crate) fn status_style(status: Status, palette: &Palette) -> Style {
    match status {
        Status::Open => Style::default().fg(palette.accent),
        Status::InProgress => Style::default().fg(palette.warn),
        Status::Done => Style::default().fg(palette.ok),
    }
}
