use super::intent::Intent;
use super::state::UiState;

/// Pure state transition for one slice of the client.
///
/// Stores and views never mutate their state directly; every change is an
/// intent run through a reducer, so the same sequence of intents always
/// lands on the same state regardless of which thread delivered them.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over a state held in place (behind a lock or a struct field).
pub fn reduce_in_place<R: Reducer>(state: &mut R::State, intent: R::Intent) {
    *state = R::reduce(std::mem::take(state), intent);
}
