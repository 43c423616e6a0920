use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::store::ChangeListener;

/// A store operation finished and the UI owes it a follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    TaskSaved { id: String },
    TaskDeleted,
    CommentAdded { task_id: String },
    UserCreated,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// A store reduced an intent. Carries the store name.
    StoreChanged(&'static str),
    Completed(Completion),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Channel only, no input thread. Used when something other than the
    /// terminal drives the app.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    /// Spawn the crossterm polling thread that feeds keys, resizes and ticks.
    pub fn new(tick_rate: Duration) -> Self {
        let handler = Self::detached();
        let event_tx = handler.tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(e) => {
                                tracing::error!(error = %e, "Failed to read terminal event");
                                break;
                            }
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to poll terminal events");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        handler
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Drain whatever is already queued without blocking.
    pub fn try_next(&self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }

    /// Store listener that posts `StoreChanged` into this channel.
    pub fn listener(&self) -> ChangeListener {
        let tx = self.tx.clone();
        Arc::new(move |store: &'static str| {
            let _ = tx.send(AppEvent::StoreChanged(store));
        })
    }
}
