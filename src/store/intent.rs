use crate::model::Entity;
use crate::mvi::Intent;

use super::slice::{Operation, RequestId};

/// Everything that can happen to a resource slice.
///
/// Each store operation produces `Requested` followed by exactly one
/// resolved variant or `Rejected`, all carrying the same request id.
#[derive(Debug, Clone)]
pub enum SliceIntent<T> {
    Requested { request: RequestId, op: Operation },

    FetchedAll { request: RequestId, items: Vec<T> },
    FetchedOne { request: RequestId, item: T },
    Created { request: RequestId, item: T },
    Updated { request: RequestId, item: T },
    Deleted { request: RequestId, id: String },

    Rejected { request: RequestId, message: String },

    ClearError,
    SetCurrent(Option<T>),
    /// Drop all cached data and forget in-flight requests.
    Reset,
}

impl<T: Entity> Intent for SliceIntent<T> {}
