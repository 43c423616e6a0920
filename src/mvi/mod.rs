//! Model-View-Intent primitives shared by the resource stores and the views.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── store operation ─────┘
//! ```
//!
//! - **State**: a self-contained snapshot a view can render from
//! - **Intent**: a user gesture, or one phase of a network operation
//!   (requested, resolved, rejected)
//! - **Reducer**: pure `(State, Intent) -> State`; network I/O happens in the
//!   stores, never here

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{reduce_in_place, Reducer};
pub use state::UiState;
