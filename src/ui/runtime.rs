use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::store::AppContext;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::routes::Route;
use crate::ui::terminal_guard::setup_terminal;

/// Run the TUI until the user quits.
///
/// `events` must be the handler whose listener was given to the stores in
/// `ctx`, otherwise store changes never trigger a redraw.
pub fn run(
    ctx: AppContext,
    runtime: Handle,
    events: EventHandler,
    initial: Route,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(ctx, runtime, events.sender());
    app.navigate(initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        // One redraw per burst of store notifications.
        while let Some(event) = events.try_next() {
            app.on_event(event);
        }
    }

    drop(guard);
    Ok(())
}
