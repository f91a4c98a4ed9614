use crate::ui::input::KEY_BINDINGS;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left, crate version on the right.
pub struct Footer {
    hints: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        let hints = KEY_BINDINGS
            .iter()
            .map(|binding| format!("{}: {}", binding.hint, binding.action.label()))
            .collect::<Vec<_>>()
            .join(" │ ");
        Self {
            hints: format!(" {}", hints),
        }
    }

    pub fn hints(&self) -> &str {
        &self.hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain arrows.
        let used = self.hints.chars().count() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(self.hints.clone(), text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
