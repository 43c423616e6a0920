use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::store::ThemeMode;
use crate::ui::routes::{Route, Section};
use crate::ui::theme::Palette;

pub struct Header<'a> {
    route: &'a Route,
    mode: ThemeMode,
    busy: bool,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, mode: ThemeMode, busy: bool, palette: &'a Palette) -> Self {
        Self {
            route,
            mode,
            busy,
            palette,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.palette.text);
        let separator_style = Style::default().fg(self.palette.muted);
        let active = self.route.section();

        let mut spans = vec![
            Span::styled(
                "  taskdeck",
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, section) in Section::ALL.iter().enumerate() {
            let style = if *section == active {
                text_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                separator_style
            };
            spans.push(Span::styled(format!("{} {}", idx + 1, section.label()), style));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("│  ", separator_style));
        spans.push(Span::styled(self.route.path(), separator_style));
        if self.busy {
            spans.push(Span::styled("  ⟳", Style::default().fg(self.palette.warn)));
        }
        spans.push(Span::styled(format!("  │  {}", self.mode.as_str()), separator_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(self.palette.border)),
        )
    }
}
