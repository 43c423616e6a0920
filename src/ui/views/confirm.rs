//! Confirmation dialog guarding destructive operations.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::mvi::{Intent, Reducer, UiState};
use crate::ui::layout::centered_rect;
use crate::ui::theme::Palette;

/// A delete waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Task { id: String },
    Comment { id: String },
}

impl PendingDelete {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingDelete::Task { .. } => "Are you sure you want to delete this task?",
            PendingDelete::Comment { .. } => "Are you sure you want to delete this comment?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfirmState {
    #[default]
    Hidden,
    Visible { pending: PendingDelete },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    Ask(PendingDelete),
    /// User answered yes. The caller takes the pending delete before
    /// dispatching this.
    Accept,
    Cancel,
}

impl Intent for ConfirmIntent {}

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A second request while one is open replaces nothing.
            ConfirmIntent::Ask(pending) => match state {
                ConfirmState::Hidden => ConfirmState::Visible { pending },
                visible => visible,
            },
            ConfirmIntent::Accept | ConfirmIntent::Cancel => ConfirmState::Hidden,
        }
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ConfirmState, palette: &Palette) {
    let ConfirmState::Visible { pending } = state else {
        return;
    };

    let popup = centered_rect(50, 25, area);
    let lines = vec![
        Line::from(""),
        Line::from(pending.prompt()),
        Line::from(""),
        Line::styled(
            "y / Enter: delete    n / Esc: cancel",
            Style::default().fg(palette.muted),
        ),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(palette.text).bg(palette.background))
            .block(
                Block::default()
                    .title(" Confirm ")
                    .title_style(Style::default().add_modifier(Modifier::BOLD))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.error)),
            ),
        popup,
    );
}
