use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::{CreateUser, User};
use crate::store::ResourceSlice;
use crate::ui::layout::status_and_content;
use crate::ui::theme::Palette;

use super::input::TextInput;
use super::{is_down, is_up, status_line, step, Command};

pub const ALL_FIELDS_REQUIRED: &str = "Name, email, contact and password are required";

const FIELD_LABELS: [&str; 4] = ["Name", "Email", "Contact", "Password"];

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub name: TextInput,
    pub email: TextInput,
    pub contact: TextInput,
    pub password: TextInput,
    focused: usize,
    error: Option<&'static str>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: TextInput::default(),
            email: TextInput::default(),
            contact: TextInput::default(),
            password: TextInput::masked(),
            focused: 0,
            error: None,
        }
    }
}

impl UserForm {
    fn field_mut(&mut self, index: usize) -> &mut TextInput {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.contact,
            _ => &mut self.password,
        }
    }

    fn field(&self, index: usize) -> &TextInput {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.contact,
            _ => &self.password,
        }
    }

    pub fn submit(&mut self) -> Option<CreateUser> {
        let (Some(name), Some(email), Some(contact)) = (
            self.name.submitted(),
            self.email.submitted(),
            self.contact.submitted(),
        ) else {
            self.error = Some(ALL_FIELDS_REQUIRED);
            return None;
        };
        // Passwords are sent as typed.
        if self.password.value().is_empty() {
            self.error = Some(ALL_FIELDS_REQUIRED);
            return None;
        }
        self.error = None;
        Some(CreateUser {
            name,
            email,
            contact,
            password: self.password.value().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersView {
    form: Option<UserForm>,
    selected: usize,
}

impl UsersView {
    pub fn is_editing(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&UserForm> {
        self.form.as_ref()
    }

    pub fn toggle_form(&mut self) {
        self.form = match self.form {
            Some(_) => None,
            None => Some(UserForm::default()),
        };
    }

    /// Called once the server accepted the new user.
    pub fn user_created(&mut self) {
        self.form = None;
    }

    pub fn on_key(&mut self, key: &KeyEvent, users: &[User]) -> Option<Command> {
        if let Some(form) = self.form.as_mut() {
            match key.code {
                KeyCode::Esc => self.form = None,
                KeyCode::Enter => return form.submit().map(Command::CreateUser),
                KeyCode::Tab | KeyCode::Down => form.focused = (form.focused + 1) % FIELD_LABELS.len(),
                KeyCode::BackTab | KeyCode::Up => {
                    form.focused = (form.focused + FIELD_LABELS.len() - 1) % FIELD_LABELS.len()
                }
                _ => {
                    let focused = form.focused;
                    form.field_mut(focused).handle_key(key);
                }
            }
            return None;
        }

        match key.code {
            _ if is_down(key) => self.selected = step(self.selected, 1, users.len()),
            _ if is_up(key) => self.selected = step(self.selected, -1, users.len()),
            KeyCode::Char('n') | KeyCode::Char('a') => self.toggle_form(),
            KeyCode::Char('r') => return Some(Command::Refresh),
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, slice: &ResourceSlice<User>, palette: &Palette) {
        let (status_row, content) = status_and_content(area);
        let error = self.form.as_ref().and_then(|f| f.error).or(slice.error.as_deref());
        let busy = if slice.submitting() {
            Some("Creating user...")
        } else if slice.loading() {
            Some("Loading users...")
        } else {
            None
        };
        frame.render_widget(Paragraph::new(status_line(error, busy, palette)), status_row);

        let form_height = if self.form.is_some() { 6 } else { 0 };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(form_height), Constraint::Min(3)])
            .split(content);

        if let Some(form) = &self.form {
            render_form(frame, parts[0], form, palette);
        }

        let header = Row::new(["Name", "Email", "Contact"])
            .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD));
        let rows = slice.items.iter().enumerate().map(|(idx, user)| {
            let row = Row::new(vec![user.name.clone(), user.email.clone(), user.contact.clone()]);
            if idx == self.selected {
                row.style(Style::default().bg(palette.highlight))
            } else {
                row
            }
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .title(format!(" Users ({}) ", slice.items.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
        frame.render_widget(table, parts[1]);
    }
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &UserForm, palette: &Palette) {
    let lines: Vec<Line> = FIELD_LABELS
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let style = if idx == form.focused {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            Line::from(vec![
                Span::styled(format!(" {label:<10}"), style),
                Span::styled(form.field(idx).display(), Style::default().fg(palette.text)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Add New User (Enter: create, Esc: close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        ),
        area,
    );
}
