use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_band, layout_regions};
use crate::ui::theme::{COUNT_ACCENT, DECREMENT, GLOBAL_BORDER, HINT_TEXT, INCREMENT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        body,
    );

    let state = app.view_state();
    let lines = vec![
        Line::from(Span::styled(
            state.label(),
            Style::default()
                .fg(COUNT_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ − ]", Style::default().fg(DECREMENT)),
            Span::styled("   ", Style::default().fg(HINT_TEXT)),
            Span::styled("[ + ]", Style::default().fg(INCREMENT)),
        ]),
    ];
    let band = centered_band(lines.len() as u16, body);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);

    frame.render_widget(Footer::new().widget(footer), footer);
}
