use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{Comment, Task};
use crate::store::ResourceSlice;
use crate::ui::layout::status_and_content;
use crate::ui::routes::Route;
use crate::ui::theme::Palette;

use super::input::TextInput;
use super::{is_down, is_up, status_line, status_style, step, Command, PendingDelete};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetailView {
    task_id: String,
    comment: TextInput,
    composing: bool,
    selected_comment: usize,
}

impl TaskDetailView {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            comment: TextInput::default(),
            composing: false,
            selected_comment: 0,
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// True while the comment box captures the keyboard.
    pub fn is_editing(&self) -> bool {
        self.composing
    }

    pub fn on_key(
        &mut self,
        key: &KeyEvent,
        task: Option<&Task>,
        comments: &[Comment],
    ) -> Option<Command> {
        if self.composing {
            match key.code {
                KeyCode::Esc => self.composing = false,
                // Blank comments are dropped without a request.
                KeyCode::Enter => {
                    return self.comment.submitted().map(|content| Command::AddComment {
                        task_id: self.task_id.clone(),
                        content,
                    });
                }
                _ => {
                    self.comment.handle_key(key);
                }
            }
            return None;
        }

        match key.code {
            _ if is_down(key) => {
                self.selected_comment = step(self.selected_comment, 1, comments.len())
            }
            _ if is_up(key) => {
                self.selected_comment = step(self.selected_comment, -1, comments.len())
            }
            KeyCode::Char('c') | KeyCode::Char('a') => self.composing = true,
            KeyCode::Char('e') => {
                return Some(Command::Navigate(Route::TaskEdit(self.task_id.clone())))
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                return task.map(|task| {
                    Command::Confirm(PendingDelete::Task {
                        id: task.id.clone(),
                    })
                });
            }
            KeyCode::Char('d') => {
                return comments.get(self.selected_comment).map(|comment| {
                    Command::Confirm(PendingDelete::Comment {
                        id: comment.id.clone(),
                    })
                });
            }
            KeyCode::Char('r') => return Some(Command::Refresh),
            KeyCode::Esc | KeyCode::Backspace => return Some(Command::Navigate(Route::Tasks)),
            _ => {}
        }
        None
    }

    /// Called once the server accepted the comment.
    pub fn comment_added(&mut self) {
        self.comment.clear();
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        tasks: &ResourceSlice<Task>,
        comments: &ResourceSlice<Comment>,
        palette: &Palette,
    ) {
        let (status_row, content) = status_and_content(area);
        let error = tasks.error.as_deref().or(comments.error.as_deref());
        let busy = if tasks.submitting() || comments.submitting() {
            Some("Saving...")
        } else if tasks.loading() || comments.loading() {
            Some("Loading...")
        } else {
            None
        };
        frame.render_widget(Paragraph::new(status_line(error, busy, palette)), status_row);

        let task = tasks
            .current
            .as_ref()
            .filter(|t| t.id == self.task_id)
            .or_else(|| tasks.find(&self.task_id));

        let input_height = if self.composing { 3 } else { 0 };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Min(3),
                Constraint::Length(input_height),
            ])
            .split(content);

        self.render_task(frame, parts[0], task, palette);
        self.render_comments(frame, parts[1], &comments.items, palette);
        if self.composing {
            frame.render_widget(
                Paragraph::new(self.comment.value().to_string())
                    .style(Style::default().fg(palette.text))
                    .block(
                        Block::default()
                            .title(" New comment (Enter: post, Esc: cancel) ")
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(palette.accent)),
                    ),
                parts[2],
            );
        }
    }

    fn render_task(&self, frame: &mut Frame<'_>, area: Rect, task: Option<&Task>, palette: &Palette) {
        let label = Style::default().fg(palette.muted);
        let lines = match task {
            Some(task) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        task.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(task.description.clone()),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Assigned to: ", label),
                        Span::raw(task.assigned_to.label().to_string()),
                    ]),
                    Line::from(vec![
                        Span::styled("Priority:    ", label),
                        Span::raw(task.priority.label()),
                        Span::styled("   Status: ", label),
                        Span::styled(task.status.label(), status_style(task.status, palette)),
                    ]),
                ];
                if let Some(created) = task.created_at {
                    lines.push(Line::from(vec![
                        Span::styled("Created:     ", label),
                        Span::raw(created.format(TIMESTAMP_FORMAT).to_string()),
                    ]));
                }
                lines
            }
            None => vec![Line::from(Span::styled("Task not loaded.", label))],
        };

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .style(Style::default().fg(palette.text))
                .block(
                    Block::default()
                        .title(" Task ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(palette.border)),
                ),
            area,
        );
    }

    fn render_comments(&self, frame: &mut Frame<'_>, area: Rect, comments: &[Comment], palette: &Palette) {
        let items: Vec<ListItem> = if comments.is_empty() {
            vec![ListItem::new(Span::styled(
                "No comments yet.",
                Style::default().fg(palette.muted),
            ))]
        } else {
            comments
                .iter()
                .enumerate()
                .map(|(idx, comment)| {
                    let stamp = comment
                        .created_at
                        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                        .unwrap_or_default();
                    let line = Line::from(vec![
                        Span::styled(format!("{stamp:<17}"), Style::default().fg(palette.muted)),
                        Span::raw(comment.content.clone()),
                    ]);
                    let item = ListItem::new(line);
                    if idx == self.selected_comment {
                        item.style(Style::default().bg(palette.highlight))
                    } else {
                        item
                    }
                })
                .collect()
        };

        frame.render_widget(
            List::new(items).style(Style::default().fg(palette.text)).block(
                Block::default()
                    .title(format!(" Comments ({}) ", comments.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignee, Priority, Status};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn task() -> Task {
        Task {
            id: "t1".into(),
            title: "Ship".into(),
            description: String::new(),
            assigned_to: Assignee::Reference("a@x.com".into()),
            priority: Priority::High,
            status: Status::Open,
            created_at: None,
        }
    }

    fn comment(id: &str) -> Comment {
        Comment {
            id: id.into(),
            content: "hello".into(),
            task_id: "t1".into(),
            created_at: None,
        }
    }

    #[test]
    fn blank_comment_is_ignored() {
        let mut view = TaskDetailView::new("t1");
        view.on_key(&key(KeyCode::Char('c')), None, &[]);
        for ch in "   ".chars() {
            view.on_key(&key(KeyCode::Char(ch)), None, &[]);
        }
        assert_eq!(view.on_key(&key(KeyCode::Enter), None, &[]), None);
        assert!(view.is_editing());
    }

    #[test]
    fn comment_is_trimmed_and_submitted() {
        let mut view = TaskDetailView::new("t1");
        view.on_key(&key(KeyCode::Char('c')), None, &[]);
        for ch in " ok ".chars() {
            view.on_key(&key(KeyCode::Char(ch)), None, &[]);
        }
        assert_eq!(
            view.on_key(&key(KeyCode::Enter), None, &[]),
            Some(Command::AddComment {
                task_id: "t1".into(),
                content: "ok".into()
            })
        );
    }

    #[test]
    fn delete_task_asks_first() {
        let mut view = TaskDetailView::new("t1");
        let task = task();
        assert_eq!(
            view.on_key(&key(KeyCode::Char('x')), Some(&task), &[]),
            Some(Command::Confirm(PendingDelete::Task { id: "t1".into() }))
        );
    }

    #[test]
    fn delete_comment_targets_selection() {
        let mut view = TaskDetailView::new("t1");
        let comments = [comment("c1"), comment("c2")];
        view.on_key(&key(KeyCode::Down), None, &comments);
        assert_eq!(
            view.on_key(&key(KeyCode::Char('d')), None, &comments),
            Some(Command::Confirm(PendingDelete::Comment { id: "c2".into() }))
        );
    }

    #[test]
    fn delete_without_comments_does_nothing() {
        let mut view = TaskDetailView::new("t1");
        assert_eq!(view.on_key(&key(KeyCode::Char('d')), None, &[]), None);
    }
}
