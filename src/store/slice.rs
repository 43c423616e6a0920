use std::fmt;

use uuid::Uuid;

use crate::model::Entity;
use crate::mvi::UiState;

/// Identifies one in-flight operation on a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of work a request performs against its slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fetches drive `loading`, everything else drives `submitting`.
    pub fn is_fetch(self) -> bool {
        matches!(self, Operation::FetchAll | Operation::FetchOne)
    }
}

/// Cached server data for one resource plus its request lifecycle.
///
/// `loading` and `submitting` are derived from the set of in-flight
/// requests, so two overlapping mutations keep `submitting` raised until
/// both have settled.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlice<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub error: Option<String>,
    in_flight: Vec<(RequestId, Operation)>,
}

impl<T> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            error: None,
            in_flight: Vec::new(),
        }
    }
}

impl<T: Entity> UiState for ResourceSlice<T> {}

impl<T: Entity> ResourceSlice<T> {
    pub fn loading(&self) -> bool {
        self.in_flight.iter().any(|(_, op)| op.is_fetch())
    }

    pub fn submitting(&self) -> bool {
        self.in_flight.iter().any(|(_, op)| !op.is_fetch())
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_pending(&self, request: RequestId) -> bool {
        self.in_flight.iter().any(|(id, _)| *id == request)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn begin(&mut self, request: RequestId, op: Operation) {
        self.in_flight.push((request, op));
    }

    /// Forget `request`. Returns false when it was never tracked (or the
    /// slice was reset since), in which case the outcome must be dropped.
    pub(crate) fn settle(&mut self, request: RequestId) -> bool {
        let before = self.in_flight.len();
        self.in_flight.retain(|(id, _)| *id != request);
        self.in_flight.len() != before
    }
}
