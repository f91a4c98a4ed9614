use countup::ui::app::App;
use countup::ui::counter::CounterIntent;
use countup::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn renders_title_and_initial_count() {
    let app = App::new("Count Up");
    let text = screen_text(&app);
    assert!(text.contains("Count Up"));
    assert!(text.contains("Count: 0"));
}

#[test]
fn renders_updated_count() {
    let mut app = App::new("Count Up");
    app.dispatch(CounterIntent::Increment);
    app.dispatch(CounterIntent::Increment);
    app.dispatch(CounterIntent::Decrement);
    let text = screen_text(&app);
    assert!(text.contains("Count: 1"));
}

#[test]
fn renders_key_hints() {
    let app = App::new("Count Up");
    let text = screen_text(&app);
    assert!(text.contains("q: Quit"));
}
