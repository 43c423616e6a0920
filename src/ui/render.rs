use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::routes::Route;
use crate::ui::views::confirm;
use crate::ui::views::dashboard;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = app.palette();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let ctx = app.context();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let tasks = ctx.tasks.state();
    let users = ctx.users.state();
    let comments = ctx.comments.state();
    let report = ctx.report.state();
    let busy = [
        tasks.in_flight(),
        users.in_flight(),
        comments.in_flight(),
        usize::from(report.loading()),
    ]
    .iter()
    .any(|n| *n > 0);

    let header_widget = Header::new(app.route(), app.theme_mode(), busy, palette);
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Tasks => app.task_list().render(frame, body, &tasks, palette),
        Route::TaskDetail(_) => {
            if let Some(view) = app.task_detail() {
                view.render(frame, body, &tasks, &comments, palette);
            }
        }
        Route::TaskNew | Route::TaskEdit(_) => {
            if let Some(form) = app.task_form() {
                form.render(frame, body, &tasks, &users, palette);
            }
        }
        Route::Users => app.users().render(frame, body, &users, palette),
        Route::Dashboard => dashboard::render(frame, body, &report, palette),
    }

    let footer_widget = Footer::new(app.route(), app.is_editing(), palette);
    frame.render_widget(footer_widget.widget(), footer);

    confirm::render(frame, area, app.confirm(), palette);
}
