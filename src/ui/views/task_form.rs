use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{CreateTask, Priority, Status, Task, UpdateTask, User};
use crate::store::ResourceSlice;
use crate::ui::layout::status_and_content;
use crate::ui::routes::Route;
use crate::ui::theme::Palette;

use super::input::TextInput;
use super::{status_line, Command};

pub const REQUIRED_FIELDS: &str = "Title, description and assignee are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Assignee,
    Priority,
    Status,
}

impl FormField {
    fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Assignee => "Assign to",
            FormField::Priority => "Priority",
            FormField::Status => "Status",
        }
    }
}

const CREATE_FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::Description,
    FormField::Assignee,
    FormField::Priority,
];

const EDIT_FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::Description,
    FormField::Assignee,
    FormField::Priority,
    FormField::Status,
];

/// What the form sends once it validates.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskSubmission {
    Create(CreateTask),
    Update { id: String, patch: UpdateTask },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    /// `Some(id)` when editing.
    editing: Option<String>,
    prefilled: bool,
    pub title: TextInput,
    pub description: TextInput,
    pub assignee: TextInput,
    pub priority: Priority,
    pub status: Status,
    focused: usize,
    error: Option<&'static str>,
}

impl TaskForm {
    pub fn create() -> Self {
        Self {
            editing: None,
            prefilled: true,
            title: TextInput::default(),
            description: TextInput::default(),
            assignee: TextInput::default(),
            priority: Priority::default(),
            status: Status::default(),
            focused: 0,
            error: None,
        }
    }

    /// Empty edit form for `id`; filled in by [`TaskForm::prefill`] once the
    /// task is available.
    pub fn edit(id: impl Into<String>) -> Self {
        Self {
            editing: Some(id.into()),
            prefilled: false,
            ..Self::create()
        }
    }

    /// Id of the task whose data the form is still waiting for.
    pub fn awaiting_prefill(&self) -> Option<&str> {
        match &self.editing {
            Some(id) if !self.prefilled => Some(id),
            _ => None,
        }
    }

    pub fn prefill(&mut self, task: &Task) {
        self.title.set(task.title.clone());
        self.description.set(task.description.clone());
        self.assignee.set(task.assigned_to.email());
        self.priority = task.priority;
        self.status = task.status;
        self.prefilled = true;
    }

    fn fields(&self) -> &'static [FormField] {
        if self.editing.is_some() {
            EDIT_FIELDS
        } else {
            CREATE_FIELDS
        }
    }

    pub fn focused(&self) -> FormField {
        self.fields()[self.focused.min(self.fields().len() - 1)]
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Where Esc leads: the task for an edit, the list for a create.
    pub fn back_route(&self) -> Route {
        match &self.editing {
            Some(id) => Route::TaskDetail(id.clone()),
            None => Route::Tasks,
        }
    }

    pub fn submit(&mut self) -> Option<TaskSubmission> {
        let (Some(title), Some(description), Some(assignee)) = (
            self.title.submitted(),
            self.description.submitted(),
            self.assignee.submitted(),
        ) else {
            self.error = Some(REQUIRED_FIELDS);
            return None;
        };
        self.error = None;

        Some(match &self.editing {
            None => TaskSubmission::Create(CreateTask {
                title,
                description,
                assigned_to: assignee,
                priority: self.priority,
            }),
            Some(id) => TaskSubmission::Update {
                id: id.clone(),
                patch: UpdateTask {
                    title: Some(title),
                    description: Some(description),
                    assigned_to: Some(assignee),
                    priority: Some(self.priority),
                    status: Some(self.status),
                },
            },
        })
    }

    pub fn on_key(&mut self, key: &KeyEvent, users: &[User]) -> Option<Command> {
        let count = self.fields().len();
        if key.code == KeyCode::Esc {
            return Some(Command::Navigate(self.back_route()));
        }
        // Fields stay read-only until the task arrives, or prefill would
        // overwrite what was typed.
        if self.awaiting_prefill().is_some() {
            return None;
        }
        match key.code {
            KeyCode::Enter => return self.submit().map(Command::SaveTask),
            KeyCode::Tab | KeyCode::Down => self.focused = (self.focused + 1) % count,
            KeyCode::BackTab | KeyCode::Up => self.focused = (self.focused + count - 1) % count,
            KeyCode::Left => self.cycle(-1, users),
            KeyCode::Right => self.cycle(1, users),
            _ => match self.focused() {
                FormField::Title => {
                    self.title.handle_key(key);
                }
                FormField::Description => {
                    self.description.handle_key(key);
                }
                FormField::Assignee => {
                    self.assignee.handle_key(key);
                }
                FormField::Priority | FormField::Status => {
                    if key.code == KeyCode::Char(' ') {
                        self.cycle(1, users);
                    }
                }
            },
        }
        None
    }

    /// Step a choice field. The assignee steps through known user emails.
    fn cycle(&mut self, delta: isize, users: &[User]) {
        match self.focused() {
            FormField::Priority => self.priority = cycle_in(&Priority::ALL, self.priority, delta),
            FormField::Status => self.status = cycle_in(&Status::ALL, self.status, delta),
            FormField::Assignee if !users.is_empty() => {
                let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
                let next = match emails.iter().position(|e| *e == self.assignee.value()) {
                    Some(i) => (i as isize + delta).rem_euclid(emails.len() as isize) as usize,
                    None => 0,
                };
                self.assignee.set(emails[next]);
            }
            _ => {}
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        tasks: &ResourceSlice<Task>,
        users: &ResourceSlice<User>,
        palette: &Palette,
    ) {
        let (status_row, content) = status_and_content(area);
        let error = self
            .error
            .or(tasks.error.as_deref())
            .or(users.error.as_deref());
        let busy = if tasks.submitting() {
            Some("Saving...")
        } else if self.awaiting_prefill().is_some() && tasks.loading() {
            Some("Loading task...")
        } else if users.loading() {
            Some("Loading users...")
        } else {
            None
        };
        frame.render_widget(Paragraph::new(status_line(error, busy, palette)), status_row);

        let focused = self.focused();
        let mut lines = Vec::new();
        for field in self.fields() {
            let value = match field {
                FormField::Title => self.title.display(),
                FormField::Description => self.description.display(),
                FormField::Assignee => self.assignee.display(),
                FormField::Priority => format!("‹ {} ›", self.priority.label()),
                FormField::Status => format!("‹ {} ›", self.status.label()),
            };
            let (marker, style) = if *field == focused {
                ("▸ ", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(palette.muted))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:<12}", field.label()), style),
                Span::styled(value, Style::default().fg(palette.text)),
            ]));
            lines.push(Line::from(""));
        }

        if focused == FormField::Assignee && !users.items.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(
                    "  Known users: {}",
                    users
                        .items
                        .iter()
                        .map(|u| u.email.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                Style::default().fg(palette.muted),
            )));
        }

        let title = if self.editing.is_some() {
            " Edit Task "
        } else {
            " Create New Task "
        };
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            ),
            content,
        );
    }
}

fn cycle_in<T: Copy + PartialEq>(values: &[T], current: T, delta: isize) -> T {
    let len = values.len() as isize;
    let idx = values.iter().position(|v| *v == current).unwrap_or(0) as isize;
    values[(idx + delta).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignee, UserSummary};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut TaskForm, text: &str) {
        for ch in text.chars() {
            form.on_key(&key(KeyCode::Char(ch)), &[]);
        }
    }

    fn user(email: &str) -> User {
        User {
            id: email.into(),
            name: email.into(),
            email: email.into(),
            contact: String::new(),
        }
    }

    #[test]
    fn create_defaults_to_medium_without_status() {
        let form = TaskForm::create();
        assert_eq!(form.priority, Priority::Medium);
        assert!(!form.fields().contains(&FormField::Status));
        assert!(TaskForm::edit("t1").fields().contains(&FormField::Status));
    }

    #[test]
    fn missing_required_fields_block_submit() {
        let mut form = TaskForm::create();
        type_str(&mut form, "Title only");
        assert_eq!(form.on_key(&key(KeyCode::Enter), &[]), None);
        assert_eq!(form.error(), Some(REQUIRED_FIELDS));
    }

    #[test]
    fn complete_create_form_submits() {
        let mut form = TaskForm::create();
        type_str(&mut form, "T");
        form.on_key(&key(KeyCode::Tab), &[]);
        type_str(&mut form, "D");
        form.on_key(&key(KeyCode::Tab), &[]);
        type_str(&mut form, "a@x.com");
        form.on_key(&key(KeyCode::Tab), &[]);
        form.on_key(&key(KeyCode::Right), &[]);

        assert_eq!(
            form.on_key(&key(KeyCode::Enter), &[]),
            Some(Command::SaveTask(TaskSubmission::Create(CreateTask {
                title: "T".into(),
                description: "D".into(),
                assigned_to: "a@x.com".into(),
                priority: Priority::High,
            })))
        );
    }

    #[test]
    fn edit_prefills_assignee_email() {
        let task = Task {
            id: "t1".into(),
            title: "Ship".into(),
            description: "it".into(),
            assigned_to: Assignee::Embedded(UserSummary {
                id: "u1".into(),
                name: "Ada".into(),
                email: "ada@x.com".into(),
            }),
            priority: Priority::Low,
            status: Status::InProgress,
            created_at: None,
        };
        let mut form = TaskForm::edit("t1");
        assert_eq!(form.awaiting_prefill(), Some("t1"));
        form.prefill(&task);
        assert_eq!(form.awaiting_prefill(), None);
        assert_eq!(form.assignee.value(), "ada@x.com");

        let Some(TaskSubmission::Update { id, patch }) = form.submit() else {
            panic!("expected update");
        };
        assert_eq!(id, "t1");
        assert_eq!(patch.status, Some(Status::InProgress));
        assert_eq!(patch.assigned_to.as_deref(), Some("ada@x.com"));
    }

    #[test]
    fn edit_ignores_typing_until_prefilled() {
        let task = Task {
            id: "t1".into(),
            title: "Ship".into(),
            description: "it".into(),
            assigned_to: Assignee::Reference("a@x.com".into()),
            priority: Priority::Low,
            status: Status::Open,
            created_at: None,
        };
        let mut form = TaskForm::edit("t1");
        type_str(&mut form, "early");
        assert_eq!(form.on_key(&key(KeyCode::Enter), &[]), None);
        assert!(form.title.is_blank());
        assert_eq!(form.error(), None);
        assert_eq!(
            form.on_key(&key(KeyCode::Esc), &[]),
            Some(Command::Navigate(Route::TaskDetail("t1".into())))
        );

        form.prefill(&task);
        type_str(&mut form, "!");
        assert_eq!(form.title.value(), "Ship!");
    }

    #[test]
    fn assignee_cycles_through_users() {
        let users = [user("a@x.com"), user("b@x.com")];
        let mut form = TaskForm::create();
        form.on_key(&key(KeyCode::Tab), &users);
        form.on_key(&key(KeyCode::Tab), &users);
        form.on_key(&key(KeyCode::Right), &users);
        assert_eq!(form.assignee.value(), "a@x.com");
        form.on_key(&key(KeyCode::Right), &users);
        assert_eq!(form.assignee.value(), "b@x.com");
        form.on_key(&key(KeyCode::Right), &users);
        assert_eq!(form.assignee.value(), "a@x.com");
    }

    #[test]
    fn esc_returns_to_origin() {
        let mut form = TaskForm::edit("t9");
        assert_eq!(
            form.on_key(&key(KeyCode::Esc), &[]),
            Some(Command::Navigate(Route::TaskDetail("t9".into())))
        );
    }
}
