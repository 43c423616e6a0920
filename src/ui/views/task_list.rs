use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::{Priority, Status, Task};
use crate::store::ResourceSlice;
use crate::ui::layout::status_and_content;
use crate::ui::routes::Route;
use crate::ui::theme::Palette;

use super::{is_down, is_up, status_line, status_style, step, Command};

/// Client-side filter over a fetched collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Copy + PartialEq> TaskFilter<T> {
    pub fn matches(self, value: T) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Only(wanted) => wanted == value,
        }
    }

    /// All → first value → ... → last value → All.
    pub fn cycle(self, values: &[T]) -> Self {
        match self {
            TaskFilter::All => values.first().copied().map_or(TaskFilter::All, TaskFilter::Only),
            TaskFilter::Only(current) => {
                let next = values
                    .iter()
                    .position(|v| *v == current)
                    .and_then(|i| values.get(i + 1));
                next.copied().map_or(TaskFilter::All, TaskFilter::Only)
            }
        }
    }
}

impl TaskFilter<Status> {
    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Only(status) => status.label(),
        }
    }
}

impl TaskFilter<Priority> {
    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Only(priority) => priority.label(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListView {
    pub status: TaskFilter<Status>,
    pub priority: TaskFilter<Priority>,
    selected: usize,
}

impl TaskListView {
    /// Tasks passing both filters, in server order.
    pub fn visible<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks
            .iter()
            .filter(|t| self.status.matches(t.status) && self.priority.matches(t.priority))
            .collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn on_key(&mut self, key: &KeyEvent, tasks: &[Task]) -> Option<Command> {
        let visible = self.visible(tasks);
        match key.code {
            _ if is_down(key) => self.selected = step(self.selected, 1, visible.len()),
            _ if is_up(key) => self.selected = step(self.selected, -1, visible.len()),
            KeyCode::Enter => {
                return visible
                    .get(self.selected)
                    .map(|t| Command::Navigate(Route::TaskDetail(t.id.clone())));
            }
            KeyCode::Char('n') => return Some(Command::Navigate(Route::TaskNew)),
            KeyCode::Char('s') => {
                self.status = self.status.cycle(&Status::ALL);
                self.selected = 0;
            }
            KeyCode::Char('p') => {
                self.priority = self.priority.cycle(&Priority::ALL);
                self.selected = 0;
            }
            KeyCode::Char('r') => return Some(Command::Refresh),
            _ => {}
        }
        None
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        slice: &ResourceSlice<Task>,
        palette: &Palette,
    ) {
        let (status_row, content) = status_and_content(area);
        let busy = slice.loading().then_some("Loading tasks...");
        frame.render_widget(
            Paragraph::new(status_line(slice.error.as_deref(), busy, palette)),
            status_row,
        );

        let visible = self.visible(&slice.items);
        let header = Row::new(["Title", "Assignee", "Priority", "Status"])
            .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD));
        let rows = visible.iter().enumerate().map(|(idx, task)| {
            let row = Row::new(vec![
                Cell::from(task.title.clone()),
                Cell::from(task.assigned_to.label().to_string()),
                Cell::from(task.priority.label()),
                Cell::from(Span::styled(task.status.label(), status_style(task.status, palette))),
            ]);
            if idx == self.selected {
                row.style(Style::default().bg(palette.highlight))
            } else {
                row
            }
        });

        let title = Line::from(vec![
            Span::raw(" Tasks "),
            Span::styled(
                format!(
                    "[status: {}] [priority: {}] {}/{} ",
                    self.status.label(),
                    self.priority.label(),
                    visible.len(),
                    slice.items.len()
                ),
                Style::default().fg(palette.muted),
            ),
        ]);

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Length(10),
                Constraint::Length(13),
            ],
        )
        .header(header)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
        frame.render_widget(table, content);

        if visible.is_empty() && !slice.loading() {
            let empty = if slice.items.is_empty() {
                "No tasks yet. Press n to create one."
            } else {
                "No tasks match the current filters."
            };
            let inner = Rect {
                x: content.x + 2,
                y: content.y + 2,
                width: content.width.saturating_sub(4),
                height: content.height.saturating_sub(3).min(1),
            };
            frame.render_widget(
                Paragraph::new(empty).style(Style::default().fg(palette.muted)),
                inner,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assignee;
    use crossterm::event::KeyModifiers;

    fn task(id: &str, status: Status, priority: Priority) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            assigned_to: Assignee::Reference("a@x.com".into()),
            priority,
            status,
            created_at: None,
        }
    }

    fn key(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", Status::Open, Priority::High),
            task("2", Status::Done, Priority::High),
            task("3", Status::Open, Priority::Low),
        ]
    }

    #[test]
    fn filters_combine() {
        let tasks = sample();
        let view = TaskListView {
            status: TaskFilter::Only(Status::Open),
            priority: TaskFilter::Only(Priority::High),
            ..TaskListView::default()
        };
        let ids: Vec<_> = view.visible(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn all_filter_shows_everything() {
        let tasks = sample();
        assert_eq!(TaskListView::default().visible(&tasks).len(), 3);
    }

    #[test]
    fn cycle_wraps_through_all() {
        let mut filter = TaskFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.cycle(&Status::ALL);
            seen.push(filter);
        }
        assert_eq!(
            seen,
            [
                TaskFilter::Only(Status::Open),
                TaskFilter::Only(Status::InProgress),
                TaskFilter::Only(Status::Done),
                TaskFilter::All,
            ]
        );
    }

    #[test]
    fn filter_keys_do_not_emit_commands() {
        let tasks = sample();
        let mut view = TaskListView::default();
        assert_eq!(view.on_key(&key('s'), &tasks), None);
        assert_eq!(view.on_key(&key('p'), &tasks), None);
        assert_eq!(view.status, TaskFilter::Only(Status::Open));
        assert_eq!(view.priority, TaskFilter::Only(Priority::Low));
    }

    #[test]
    fn enter_opens_selected_visible_task() {
        let tasks = sample();
        let mut view = TaskListView {
            status: TaskFilter::Only(Status::Open),
            ..TaskListView::default()
        };
        view.on_key(&key('j'), &tasks);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            view.on_key(&enter, &tasks),
            Some(Command::Navigate(Route::TaskDetail("3".into())))
        );
    }
}
