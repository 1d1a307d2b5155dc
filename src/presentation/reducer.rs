use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::StackIntent;
use super::state::StackState;

/// Pure stack transitions. Dismiss callbacks are fired by the caller
/// before the reduced state is published.
pub struct StackReducer<V>(PhantomData<fn() -> V>);

impl<V: 'static> Reducer for StackReducer<V> {
    type State = StackState<V>;
    type Intent = StackIntent<V>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StackIntent::Present(route) => {
                state.push(route);
                state
            }
            StackIntent::Dismiss { level } if level < state.len() => {
                state.truncate(level);
                state
            }
            // Past the top: nothing to remove.
            StackIntent::Dismiss { .. } => state,
        }
    }
}
