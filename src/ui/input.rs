use crate::ui::app::App;
use crate::ui::counter::CounterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Counter(CounterIntent),
    Quit,
}

impl KeyAction {
    pub fn label(self) -> &'static str {
        match self {
            KeyAction::Counter(CounterIntent::Increment) => "Increment",
            KeyAction::Counter(CounterIntent::Decrement) => "Decrement",
            KeyAction::Quit => "Quit",
        }
    }
}

/// One row of the key map. `hint` is what the footer shows.
pub struct KeyBinding {
    pub hint: &'static str,
    pub codes: &'static [KeyCode],
    pub action: KeyAction,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        hint: "+/↑",
        codes: &[
            KeyCode::Char('+'),
            KeyCode::Char('='),
            KeyCode::Char('k'),
            KeyCode::Char('l'),
            KeyCode::Up,
            KeyCode::Right,
        ],
        action: KeyAction::Counter(CounterIntent::Increment),
    },
    KeyBinding {
        hint: "-/↓",
        codes: &[
            KeyCode::Char('-'),
            KeyCode::Char('_'),
            KeyCode::Char('j'),
            KeyCode::Char('h'),
            KeyCode::Down,
            KeyCode::Left,
        ],
        action: KeyAction::Counter(CounterIntent::Decrement),
    },
    KeyBinding {
        hint: "q",
        codes: &[KeyCode::Char('q'), KeyCode::Esc],
        action: KeyAction::Quit,
    },
];

pub fn action_for(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return Some(KeyAction::Quit);
    }

    KEY_BINDINGS
        .iter()
        .find(|binding| binding.codes.contains(&key.code))
        .map(|binding| binding.action)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match action_for(key) {
        Some(KeyAction::Counter(intent)) => app.dispatch(intent),
        Some(KeyAction::Quit) => app.request_quit(),
        None => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
