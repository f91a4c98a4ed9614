use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterViewState {
    pub count: i32,
}

impl UiState for CounterViewState {}

impl CounterViewState {
    pub fn label(&self) -> String {
        format!("Count: {}", self.count)
    }
}
