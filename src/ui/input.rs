use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::routes::Route;

/// Route a key press: global chords first, then the confirmation dialog,
/// then section shortcuts, then the active view.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return;
    }

    if app.confirm().is_visible() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_accept(),
            KeyCode::Char('n') | KeyCode::Esc => app.confirm_cancel(),
            _ => {}
        }
        return;
    }

    // Plain letters belong to the text field while one is focused.
    if !app.is_editing() {
        let section = match key.code {
            KeyCode::Char('q') => {
                app.request_quit();
                return;
            }
            KeyCode::Char('1') => Some(Route::Tasks),
            KeyCode::Char('2') => Some(Route::Users),
            KeyCode::Char('3') => Some(Route::Dashboard),
            _ => None,
        };
        if let Some(route) = section {
            app.navigate(route);
            return;
        }
    }

    app.on_view_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
