use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::ui::routes::Route;
use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const GLOBAL_HINTS: &str = "Ctrl+R: Reload │ Ctrl+T: Theme │ Ctrl+Q: Quit";

pub struct Footer<'a> {
    route: &'a Route,
    editing: bool,
    palette: &'a Palette,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route, editing: bool, palette: &'a Palette) -> Self {
        Self {
            route,
            editing,
            palette,
        }
    }

    fn view_hints(&self) -> &'static str {
        match (self.route, self.editing) {
            (Route::Tasks, _) => "↑↓: Select │ Enter: Open │ n: New │ s/p: Filter │ r: Refresh",
            (Route::TaskDetail(_), false) => {
                "c: Comment │ d: Delete comment │ e: Edit │ x: Delete task │ Esc: Back"
            }
            (Route::TaskDetail(_), true) => "Enter: Post │ Esc: Cancel",
            (Route::TaskNew | Route::TaskEdit(_), _) => {
                "Tab: Next field │ ←→: Change │ Enter: Save │ Esc: Cancel"
            }
            (Route::Users, false) => "↑↓: Select │ n: New user │ r: Refresh",
            (Route::Users, true) => "Tab: Next field │ Enter: Create │ Esc: Close",
            (Route::Dashboard, _) => "r: Refresh",
        }
    }

    /// Key hints on the left, the client version on the bottom-right border.
    pub fn widget(&self) -> Paragraph<'static> {
        let dim = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::DIM);
        let version = Line::from(format!(" v{VERSION} ")).right_aligned();

        Paragraph::new(Line::styled(
            format!(" {} │ {}", self.view_hints(), GLOBAL_HINTS),
            dim,
        ))
        .block(
            Block::bordered()
                .border_style(Style::default().fg(self.palette.border))
                .title_bottom(version)
                .title_style(dim),
        )
    }
}
