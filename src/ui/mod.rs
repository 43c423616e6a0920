//! Terminal UI: routing, views and the event loop.
//!
//! ```text
//! crossterm thread ─┐
//! store listeners  ─┼─→ mpsc<AppEvent> ─→ App (UI thread) ─→ draw
//! finished ops     ─┘                      │
//!                                          └─→ tokio: store operations
//! ```

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod routes;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;
