use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterViewState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterViewState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Same wrapping arithmetic as `Counter`.
        let count = match intent {
            CounterIntent::Increment => state.count.wrapping_add(1),
            CounterIntent::Decrement => state.count.wrapping_sub(1),
        };
        CounterViewState { count }
    }
}
