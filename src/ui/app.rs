use crate::observable::Subscription;
use crate::stream::CounterStream;
use crate::ui::counter::{CounterIntent, CounterViewState};
use parking_lot::Mutex;
use std::sync::Arc;

/// State of the counter screen.
///
/// The rendered view state is fed by a subscription on the stream, the same
/// way any other UI would observe it.
pub struct App {
    should_quit: bool,
    title: String,
    counter: CounterStream,
    view: Arc<Mutex<CounterViewState>>,
    _subscription: Subscription<i32>,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        let counter = CounterStream::new();
        let view = Arc::new(Mutex::new(CounterViewState::default()));
        let sink = Arc::clone(&view);
        let subscription = counter.subscribe(move |count| {
            *sink.lock() = CounterViewState { count };
        });

        Self {
            should_quit: false,
            title: title.into(),
            counter,
            view,
            _subscription: subscription,
        }
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        self.counter.dispatch(intent);
    }

    pub fn view_state(&self) -> CounterViewState {
        *self.view.lock()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
