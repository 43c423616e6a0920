use std::marker::PhantomData;

use crate::model::Entity;
use crate::mvi::Reducer;

use super::intent::SliceIntent;
use super::slice::{Operation, ResourceSlice};

/// Reducer shared by every resource slice.
pub struct SliceReducer<T>(PhantomData<T>);

impl<T: Entity> Reducer for SliceReducer<T> {
    type State = ResourceSlice<T>;
    type Intent = SliceIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SliceIntent::Requested { request, op } => {
                state.error = None;
                if op == Operation::FetchOne {
                    state.current = None;
                }
                state.begin(request, op);
            }

            SliceIntent::FetchedAll { request, items } => {
                if state.settle(request) {
                    state.items = items;
                }
            }

            SliceIntent::FetchedOne { request, item } => {
                if state.settle(request) {
                    state.current = Some(item);
                }
            }

            SliceIntent::Created { request, item } => {
                if state.settle(request) {
                    // The server echoing an id we already hold must not duplicate it.
                    match state.items.iter_mut().find(|t| t.id() == item.id()) {
                        Some(slot) => *slot = item,
                        None => state.items.push(item),
                    }
                }
            }

            SliceIntent::Updated { request, item } => {
                if state.settle(request) {
                    if let Some(slot) = state.items.iter_mut().find(|t| t.id() == item.id()) {
                        *slot = item.clone();
                    }
                    if state.current.as_ref().is_some_and(|c| c.id() == item.id()) {
                        state.current = Some(item);
                    }
                }
            }

            SliceIntent::Deleted { request, id } => {
                if state.settle(request) {
                    state.items.retain(|t| t.id() != id);
                    if state.current.as_ref().is_some_and(|c| c.id() == id) {
                        state.current = None;
                    }
                }
            }

            SliceIntent::Rejected { request, message } => {
                if state.settle(request) {
                    state.error = Some(message);
                }
            }

            SliceIntent::ClearError => state.error = None,

            SliceIntent::SetCurrent(current) => state.current = current,

            SliceIntent::Reset => return ResourceSlice::default(),
        }
        state
    }
}
