//! Shared, lock-guarded state for one store plus its change notification.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::api::ApiError;
use crate::mvi::{reduce_in_place, Reducer};

/// Called after every state change with the name of the store that changed.
pub type ChangeListener = Arc<dyn Fn(&'static str) + Send + Sync>;

/// Failure of a store operation.
///
/// The message has already been written into the slice's `error` field; this
/// value only lets the caller skip its follow-up (closing a form, navigating).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OpError {
    pub message: String,
}

pub type OpResult<T> = Result<T, OpError>;

/// State owned by one store, reduced only through `R`.
pub struct StateCell<R: Reducer> {
    name: &'static str,
    state: Arc<Mutex<R::State>>,
    listener: Option<ChangeListener>,
}

impl<R: Reducer> Clone for StateCell<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            state: Arc::clone(&self.state),
            listener: self.listener.clone(),
        }
    }
}

impl<R: Reducer> StateCell<R> {
    pub fn new(name: &'static str, listener: Option<ChangeListener>) -> Self {
        Self::with_state(name, R::State::default(), listener)
    }

    pub fn with_state(
        name: &'static str,
        state: R::State,
        listener: Option<ChangeListener>,
    ) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(state)),
            listener,
        }
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Apply one intent and notify the listener.
    pub fn dispatch(&self, intent: R::Intent) {
        {
            let mut guard = self.state.lock();
            reduce_in_place::<R>(&mut *guard, intent);
        }
        if let Some(listener) = &self.listener {
            listener(self.name);
        }
    }

    /// Drive one network operation through its three phases.
    ///
    /// Dispatches `requested`, awaits `call`, then dispatches either the
    /// intent built by `resolved` or the one built by `rejected`. The
    /// rejection message is the server's when it sent one, else `default_error`.
    pub async fn run<V, Fut>(
        &self,
        requested: R::Intent,
        call: Fut,
        default_error: &'static str,
        resolved: impl FnOnce(&V) -> R::Intent,
        rejected: impl FnOnce(String) -> R::Intent,
    ) -> OpResult<V>
    where
        Fut: Future<Output = Result<V, ApiError>>,
    {
        self.dispatch(requested);
        match call.await {
            Ok(value) => {
                self.dispatch(resolved(&value));
                Ok(value)
            }
            Err(err) => {
                let message = err.user_message(default_error);
                tracing::warn!(store = self.name, error = %err, "{}", default_error);
                self.dispatch(rejected(message.clone()));
                Err(OpError { message })
            }
        }
    }
}
