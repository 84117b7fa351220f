use crate::presentation::tui::app::App;
use pingpong_core::labels;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_controls(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);

    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(message.clone(), key)),
        None => Line::from(vec![
            Span::styled("n", key),
            Span::raw(format!(" {}  ", labels::NEW_GAME)),
            Span::styled("s", key),
            Span::raw(format!(" {}  ", labels::SETTINGS)),
            Span::styled("space", key),
            Span::raw(" clock  "),
            Span::styled("?", key),
            Span::raw(" help  "),
            Span::styled("q", key),
            Span::raw(" quit"),
        ]),
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}
