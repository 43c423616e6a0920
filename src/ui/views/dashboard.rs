use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::{Priority, Status, TaskReport};
use crate::store::ReportState;
use crate::ui::layout::status_and_content;
use crate::ui::theme::Palette;

use super::{status_line, status_style, Command};

pub fn on_key(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('r') => Some(Command::Refresh),
        _ => None,
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ReportState, palette: &Palette) {
    let (status_row, content) = status_and_content(area);
    let busy = state.loading().then_some("Loading report...");
    frame.render_widget(
        Paragraph::new(status_line(state.error.as_deref(), busy, palette)),
        status_row,
    );

    let Some(report) = &state.report else {
        frame.render_widget(
            Paragraph::new("No report loaded. Press r to refresh.")
                .style(Style::default().fg(palette.muted))
                .block(panel(" Dashboard ", palette)),
            content,
        );
        return;
    };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(content);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(parts[0]);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                report.total_tasks.to_string(),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("tasks in total", Style::default().fg(palette.muted))),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(panel(" Total ", palette)),
        columns[0],
    );

    let by_status: Vec<Line> = Status::ALL
        .iter()
        .map(|status| {
            count_line(
                status.label(),
                report.status_count(*status),
                status_style(*status, palette),
                palette,
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(by_status).block(panel(" By status ", palette)),
        columns[1],
    );

    let by_priority: Vec<Line> = Priority::ALL
        .iter()
        .map(|priority| {
            count_line(
                priority.label(),
                report.priority_count(*priority),
                Style::default().fg(palette.text),
                palette,
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(by_priority).block(panel(" By priority ", palette)),
        columns[2],
    );

    render_per_user(frame, parts[1], report, palette);
}

fn render_per_user(frame: &mut Frame<'_>, area: Rect, report: &TaskReport, palette: &Palette) {
    let header = Row::new(["User", "Tasks"])
        .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD));
    let rows = report
        .tasks_by_user
        .iter()
        .map(|entry| Row::new(vec![entry.user_name.clone(), entry.task_count.to_string()]));
    frame.render_widget(
        Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
            .header(header)
            .style(Style::default().fg(palette.text))
            .block(panel(" Tasks per user ", palette)),
        area,
    );
}

fn count_line(label: &'static str, count: u64, style: Style, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<12}"), style),
        Span::styled(count.to_string(), Style::default().fg(palette.text)),
    ])
}

fn panel(title: &'static str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}
